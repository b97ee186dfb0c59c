//! Emit the complete C++ class for one compiled template.
//!
//! Runs once, after the scanner's final flush/close, and serialises the
//! accumulated [`Unit`] top to bottom: guard, includes, namespace, class,
//! constructor, `render()`, accessors, fields. Parameter order everywhere is
//! the table's lexicographic order, not declaration order.

use std::io::{self, Write};

use super::Unit;
use super::chain::ACCUMULATOR;

/// Base type every generated class extends.
pub const BASE_CLASS: &str = "RenderBase";
/// Include that provides the base type (and its `escape()` helper).
pub const BASE_INCLUDE: &str = "\"RenderBase.h\"";
/// Namespace wrapping every generated class.
pub const NAMESPACE: &str = "rendered";

pub fn emit<W: Write>(unit: &Unit, out: &mut W) -> io::Result<()> {
    let guard = format!("{}_H", unit.class_name.to_uppercase());

    writeln!(out, "#ifndef {guard}")?;
    writeln!(out, "#define {guard}")?;
    writeln!(out, "// Auto-generated – DO NOT EDIT")?;
    writeln!(out)?;

    writeln!(out, "#include {BASE_INCLUDE}")?;
    for include in &unit.includes {
        writeln!(out, "#include {include}")?;
    }
    writeln!(out)?;

    writeln!(out, "namespace {NAMESPACE}")?;
    writeln!(out, "{{")?;
    writeln!(out)?;

    writeln!(out, "class {} : public {BASE_CLASS}", unit.class_name)?;
    writeln!(out, "{{")?;
    writeln!(out, "public:")?;

    if !unit.params.is_empty() {
        let args: Vec<String> = unit
            .params
            .iter()
            .map(|(name, ty)| format!("{ty} _{name}"))
            .collect();
        let inits: Vec<String> = unit
            .params
            .keys()
            .map(|name| format!("{name}(_{name})"))
            .collect();
        writeln!(
            out,
            "  {}({}) : {} {{}}",
            unit.class_name,
            args.join(", "),
            inits.join(", ")
        )?;
    }

    writeln!(out, "  virtual std::string render()")?;
    writeln!(out, "  {{")?;
    writeln!(out, "    std::ostringstream {ACCUMULATOR};")?;
    out.write_all(unit.body.as_bytes())?;
    writeln!(out, "    return {ACCUMULATOR}.str();")?;
    writeln!(out, "  }}")?;

    for (name, ty) in &unit.params {
        let pass = accessor_type(ty);
        let upper = capitalize(name);
        writeln!(out, "  {pass} get{upper}() {{ return {name}; }}")?;
        writeln!(
            out,
            "  void set{upper}({pass} _{name}) {{ {name} = _{name}; }}"
        )?;
    }

    if !unit.params.is_empty() {
        writeln!(out, "private:")?;
        for (name, ty) in &unit.params {
            writeln!(out, "  {ty} {name};")?;
        }
    }

    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "}} // namespace {NAMESPACE}")?;
    writeln!(out)?;
    writeln!(out, "#endif // {guard}")?;
    Ok(())
}

/// Pass-by convention for accessors.
///
/// Purely textual: a declared type already ending in `&` or `*` is passed as
/// a const copy, anything else as a const reference. Parameter types are
/// opaque strings here, so no real type analysis is attempted.
fn accessor_type(ty: &str) -> String {
    if ty.ends_with('&') || ty.ends_with('*') {
        format!("const {ty}")
    } else {
        format!("const {ty} &")
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
