use std::io::{Read, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::core::error::{PatchError, PatchResult};

const INDENT: &[u8] = b"    ";

/// Read a whole JSON document from `reader`.
pub fn read_document<R: Read>(mut reader: R) -> PatchResult<Value> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| PatchError::Io {
            stream: "standard input",
            source,
        })?;
    Ok(serde_json::from_str(&text)?)
}

/// Render `document` with 4-space indentation.
pub fn to_pretty_string(document: &Value) -> PatchResult<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write `document` to `writer` in one piece.
///
/// A trailing newline follows the closing brace so the output ends like any
/// other text file.
pub fn write_document<W: Write>(mut writer: W, document: &Value) -> PatchResult<()> {
    let text = to_pretty_string(document)?;
    let io_err = |source| PatchError::Io {
        stream: "standard output",
        source,
    };
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)
}
