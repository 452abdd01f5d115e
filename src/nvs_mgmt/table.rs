use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::constants::keys;

use super::config::ConfigDocs;

const HEADER: [&str; 4] = ["key", "type", "encoding", "value"];
const SEPARATOR: char = ',';
const QUOTE: char = '"';
// Matches the line terminator of Python's csv writer
const LINE_END: &str = "\r\n";

const TYPE_NAMESPACE: &str = "namespace";
const TYPE_DATA: &str = "data";
const ENCODING_BASE64: &str = "base64";

/// One line of the NVS generator's input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub kind: String,
    pub encoding: String,
    pub value: String,
}

impl Row {
    fn namespace(name: &str) -> Self {
        Self {
            key: name.into(),
            kind: TYPE_NAMESPACE.into(),
            encoding: String::new(),
            value: String::new(),
        }
    }

    fn json_data(key: &str, doc: &Value) -> Self {
        Self {
            key: key.into(),
            kind: TYPE_DATA.into(),
            encoding: ENCODING_BASE64.into(),
            value: encode_json(doc),
        }
    }

    fn fields(&self) -> [&str; 4] {
        [
            self.key.as_str(),
            self.kind.as_str(),
            self.encoding.as_str(),
            self.value.as_str(),
        ]
    }
}

/// The `config` namespace followed by the device and network documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateTable {
    rows: [Row; 3],
}

impl IntermediateTable {
    pub fn new(docs: &ConfigDocs) -> Self {
        Self {
            rows: [
                Row::namespace(keys::NAMESPACE),
                Row::json_data(keys::DEVICE_CONFIG, &docs.device),
                Row::json_data(keys::NETWORK_CONFIG, &docs.network),
            ],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        write_record(&mut csv, HEADER);
        for row in self.rows.iter() {
            write_record(&mut csv, row.fields());
        }
        csv
    }
}

/// Compact JSON (no whitespace between tokens), base64 encoded
pub fn encode_json(doc: &Value) -> String {
    STANDARD.encode(doc.to_string())
}

fn write_record(out: &mut String, fields: [&str; 4]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        write_field(out, field);
    }
    out.push_str(LINE_END);
}

fn write_field(out: &mut String, field: &str) {
    if !needs_quoting(field) {
        out.push_str(field);
        return;
    }
    out.push(QUOTE);
    for c in field.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}

fn needs_quoting(field: &str) -> bool {
    field
        .chars()
        .any(|c| c == SEPARATOR || c == QUOTE || c == '\r' || c == '\n')
}
