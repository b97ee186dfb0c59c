use std::fs;

use renderc::compiler::compile;
use renderc::model::TemplateJob;

fn compile_fixture(class_name: &str, path: &str) -> String {
    let source = fs::read_to_string(path).unwrap();
    let class = compile(&TemplateJob {
        class_name: class_name.into(),
        source,
    })
    .expect("template compiles");
    class.code
}

/// The greeting template end to end, byte for byte.
#[test]
fn generates_greeting_header() {
    let code = compile_fixture("Greeting", "tests/greeting.tpl");

    assert_eq!(
        code,
        r#"#ifndef GREETING_H
#define GREETING_H
// Auto-generated – DO NOT EDIT

#include "RenderBase.h"
#include <string>

namespace rendered
{

class Greeting : public RenderBase
{
public:
  Greeting(std::string _name) : name(_name) {}
  virtual std::string render()
  {
    std::ostringstream _os;
_os << "Hello " << name << "!\n";
    return _os.str();
  }
  const std::string & getName() { return name; }
  void setName(const std::string & _name) { name = _name; }
private:
  std::string name;
};

} // namespace rendered

#endif // GREETING_H
"#
    );
}

/// Identical input must yield identical output.
#[test]
fn output_is_reproducible() {
    let first = compile_fixture("Greeting", "tests/greeting.tpl");
    let second = compile_fixture("Greeting", "tests/greeting.tpl");
    assert_eq!(first, second);
}

/// Raw statements carry a C++ loop through; expressions inside the loop
/// chain with the surrounding literal text.
#[test]
fn generates_report_loop_body() {
    let code = compile_fixture("Report", "tests/report.tpl");

    assert!(code.contains(
        "for (int v : samples) {\n_os << \"sample \" << v << \" of \" << total;\n}\n"
    ));

    // reference-typed param passes as a const copy, value type as const ref
    assert!(code.contains("  const std::vector<int>& getSamples() { return samples; }"));
    assert!(code.contains("  const int & getTotal() { return total; }"));

    // constructor parameters in lexicographic order: samples before total
    assert!(code.contains(
        "  Report(std::vector<int>& _samples, int _total) : samples(_samples), total(_total) {}"
    ));
}
