//! Write one C++ header per generated class.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::GeneratedClass;

/// The generated file name is the class name by convention.
pub fn emit(classes: &[GeneratedClass], out_dir: &Path) -> io::Result<()> {
    for class in classes {
        let mut h = File::create(out_dir.join(format!("{}.h", class.class_name)))?;
        h.write_all(class.code.as_bytes())?;
    }
    Ok(())
}
