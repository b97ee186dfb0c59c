//! Component 2 – the functional core.
//!
//! One template in, one generated C++ class out, in a single forward pass:
//! scanner → directive dispatch → output chain → emitter.
pub mod chain;
pub mod directive;
pub mod emitter;
pub mod escape;
pub mod preprocessor;
pub mod scanner;

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, anyhow};

use crate::model::{GeneratedClass, TemplateJob};

/// Everything accumulated while scanning one template.
///
/// Created empty, populated during the pass, serialised exactly once by the
/// emitter and then discarded.
#[derive(Debug)]
pub struct Unit {
    pub class_name: String,
    /// Include references, delimiters included; emitted in this (sorted) order.
    pub includes: BTreeSet<String>,
    /// Parameter name → declared type; sorted by name, first declaration wins.
    pub params: BTreeMap<String, String>,
    /// The render program: body of the generated `render()` method.
    pub body: String,
}

impl Unit {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            includes: BTreeSet::new(),
            params: BTreeMap::new(),
            body: String::new(),
        }
    }
}

/// Compile one template into the source text of its generated class.
pub fn compile(job: &TemplateJob) -> Result<GeneratedClass> {
    let unit = scanner::Scanner::new(&job.class_name, &job.source)
        .scan()
        .map_err(|e| anyhow!(e))?;

    let mut code = Vec::new();
    emitter::emit(&unit, &mut code)?;

    Ok(GeneratedClass {
        class_name: unit.class_name,
        code: String::from_utf8(code)?,
    })
}
