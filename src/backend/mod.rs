use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, io_error};
use crate::registers::Coloring;

/// One `<node><color>` line per node, ascending by node id.
pub fn render(coloring: &Coloring) -> String {
    coloring
        .sorted()
        .into_iter()
        .map(|(node, color)| format!("{}{}\n", node, color))
        .collect()
}

/// Writes `contents` to `path`, creating or truncating it. A symlink is
/// followed and its target is overwritten.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(contents.as_bytes()).map_err(io_error(path))?;
    file.flush().map_err(io_error(path))?;

    Ok(())
}

/// Copies `contents` to `out`. A reader that hangs up early is not an error.
pub fn echo<W: Write>(out: &mut W, contents: &str) -> Result<()> {
    match out.write_all(contents.as_bytes()).and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result.map_err(io_error("<stdout>")),
    }
}
