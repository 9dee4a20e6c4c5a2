use std::io::{self, Write};

use crate::scan::FileSize;

/// How the ranked files are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Table with raw byte counts.
    Bytes,
    /// Table with KB/MB/GB sizes.
    HumanReadable,
    /// One JSON object per line, no header.
    Json,
}

/// Print `files` (already ranked) to `w`.
///
/// `count` is the number that was asked for, which may be more than
/// `files.len()`.
pub fn print(w: &mut impl Write, files: &[FileSize], count: usize, style: Style) -> io::Result<()> {
    match style {
        Style::Bytes => {
            writeln!(w, "Top {count} largest files (size in bytes):")?;
            for file in files {
                writeln!(w, "{:>10}  {}", file.size, file.path.display())?;
            }
        }
        Style::HumanReadable => {
            writeln!(w, "Top {count} largest files:")?;
            for file in files {
                writeln!(w, "{:>10}  {}", format_size(file.size), file.path.display())?;
            }
        }
        Style::Json => {
            for file in files {
                json::emit(w, file)?;
            }
        }
    }
    w.flush()
}

/// Format a byte count with binary units (1 KB = 1024 B).
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else if b < TB {
        format!("{:.2} GB", b / GB)
    } else {
        format!("{:.2} TB", b / TB)
    }
}

mod json {
    use std::io::{self, Write};

    use serde::Serialize;

    use crate::scan::FileSize;

    #[derive(Serialize)]
    struct JsonFile<'a> {
        size: u64,
        path: &'a str,
    }

    pub fn emit(w: &mut impl Write, file: &FileSize) -> io::Result<()> {
        let path = file.path.to_string_lossy();
        serde_json::to_writer(
            &mut *w,
            &JsonFile {
                size: file.size,
                path: &path,
            },
        )?;
        writeln!(w)
    }
}
