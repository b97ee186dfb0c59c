//! Interpreter for `<%@ ... %>` preprocessor directives.
//!
//! Two sub-commands are recognised, selected by the first space-delimited
//! token:
//!
//! ```text
//!     include <ref>        add one include line (delimiters kept verbatim)
//!     param <type> <name>  declare a constructor parameter / field
//! ```
//!
//! Anything else is silently ignored; templates have historically carried
//! free-form `<%@ ... %>` annotations and promoting them to errors would
//! break them.

use super::Unit;

pub fn interpret(content: &str, unit: &mut Unit) -> Result<(), String> {
    let mut tokens = content.split(' ');
    match tokens.next() {
        Some("include") => {
            let reference = tokens
                .next()
                .ok_or("include directive is missing its reference")?
                .trim();
            let delimited = (reference.starts_with('<') && reference.ends_with('>'))
                || (reference.starts_with('"') && reference.ends_with('"'));
            if !delimited {
                return Err(format!("malformed include reference `{reference}`"));
            }
            unit.includes.insert(reference.to_string());
        }
        Some("param") => {
            let ty = tokens.next().ok_or("param directive is missing its type")?;
            let name = tokens
                .next()
                .ok_or("param directive is missing its name")?;
            // first declaration wins; a repeated name never changes the type
            unit.params
                .entry(name.to_string())
                .or_insert_with(|| ty.to_string());
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::Unit;
    use super::interpret;

    fn unit() -> Unit {
        Unit::new("Demo")
    }

    #[test]
    fn test_include_keeps_delimiters_and_dedups() {
        let mut u = unit();
        interpret("include <vector>", &mut u).unwrap();
        interpret("include \"Util.h\"", &mut u).unwrap();
        interpret("include <vector>", &mut u).unwrap();

        let includes: Vec<_> = u.includes.iter().cloned().collect();
        assert_eq!(includes, vec!["\"Util.h\"", "<vector>"]);
    }

    #[test]
    fn test_include_rejects_bad_delimiters() {
        let test_cases = vec!["include vector", "include <vector\"", "include \"Util.h>"];

        for content in test_cases {
            let err = interpret(content, &mut unit()).unwrap_err();
            assert!(err.contains("malformed include"), "for {content:?}: {err}");
        }
    }

    #[test]
    fn test_param_first_writer_wins() {
        let mut u = unit();
        interpret("param int x", &mut u).unwrap();
        interpret("param std::string x", &mut u).unwrap();
        assert_eq!(u.params.get("x").map(String::as_str), Some("int"));
    }

    #[test]
    fn test_params_iterate_lexicographically() {
        let mut u = unit();
        interpret("param int zeta", &mut u).unwrap();
        interpret("param int alpha", &mut u).unwrap();

        let names: Vec<_> = u.params.keys().cloned().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_unknown_sub_command_is_tolerated() {
        let mut u = unit();
        interpret("pragma whatever", &mut u).unwrap();
        assert!(u.includes.is_empty());
        assert!(u.params.is_empty());
    }

    #[test]
    fn test_missing_arguments_are_fatal() {
        let test_cases = vec!["include", "param", "param int"];

        for content in test_cases {
            assert!(interpret(content, &mut unit()).is_err(), "for {content:?}");
        }
    }
}
