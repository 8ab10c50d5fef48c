//! pdfdump - Dump the syntax of PDF files
//!
//! Parses each input into indirect objects, the xref table, the trailer and
//! startxref, and writes them as readable text or JSON. `--tokens` dumps the
//! lexer output instead.

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::{ArgAction, Parser, ValueEnum};
use memmap2::Mmap;
use pdfsyntax_core::model::{Trailer, XRefTable};
use pdfsyntax_core::{
    Dictionary, Document, IndirectObject, ObjectBody, ParserBuilder, Token, TokenKind, Value,
};
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

// ============================================================================
// Text output
// ============================================================================

/// Render a value on one line. Dictionary keys are sorted.
fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Name(name) => name.clone(),
        Value::LiteralString(s) => format!("({})", String::from_utf8_lossy(s)),
        Value::Reference(r) => r.to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(render_value).collect();
            format!("[{}]", items.join(" "))
        }
        Value::Dictionary(dict) => {
            let entries: Vec<String> = sorted(dict)
                .into_iter()
                .map(|(k, v)| format!("{k} {}", render_value(v)))
                .collect();
            if entries.is_empty() {
                "<< >>".to_string()
            } else {
                format!("<< {} >>", entries.join(" "))
            }
        }
    }
}

fn sorted(dict: &Dictionary) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = dict.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// Top-level dictionaries get one entry per line.
fn write_dict<W: Write>(out: &mut W, dict: &Dictionary) -> io::Result<()> {
    writeln!(out, "<<")?;
    for (k, v) in sorted(dict) {
        writeln!(out, "{k} {}", render_value(v))?;
    }
    writeln!(out, ">>")
}

fn write_object<W: Write>(out: &mut W, obj: &IndirectObject, raw_stream: bool) -> io::Result<()> {
    writeln!(out, "{} {} obj", obj.objid, obj.genno)?;
    match &obj.body {
        ObjectBody::Dictionary(dict) => write_dict(out, dict)?,
        ObjectBody::Array(arr) => writeln!(out, "{}", render_value(&Value::Array(arr.clone())))?,
        ObjectBody::Stream(stream) => {
            write_dict(out, &stream.attrs)?;
            let data = stream.get_data();
            if raw_stream {
                writeln!(out, "stream")?;
                out.write_all(data)?;
                writeln!(out)?;
                writeln!(out, "endstream")?;
            } else {
                writeln!(out, "stream ({} bytes at {})", data.len(), stream.pos())?;
            }
        }
    }
    writeln!(out, "endobj")?;
    writeln!(out)
}

fn write_xref<W: Write>(out: &mut W, xref: &XRefTable) -> io::Result<()> {
    writeln!(out, "xref")?;
    for (objid, entry) in xref.iter() {
        writeln!(
            out,
            "{objid} {} {} {}",
            entry.offset_token(),
            entry.generation_token(),
            entry.flag().as_str()
        )?;
    }
    writeln!(out)
}

fn write_trailer<W: Write>(out: &mut W, trailer: &Trailer) -> io::Result<()> {
    writeln!(out, "trailer")?;
    write_dict(out, &trailer.dict)?;
    writeln!(out)
}

fn dump_text<W: Write>(out: &mut W, doc: &Document, raw_stream: bool) -> io::Result<()> {
    for obj in doc.objects() {
        write_object(out, obj, raw_stream)?;
    }
    if let Some(xref) = doc.xref() {
        write_xref(out, xref)?;
    }
    if let Some(trailer) = doc.trailer() {
        write_trailer(out, trailer)?;
    }
    if let Some(offset) = doc.startxref() {
        writeln!(out, "startxref {offset}")?;
    }
    Ok(())
}

fn dump_tokens_text<W: Write>(out: &mut W, tokens: &[Token], raw_stream: bool) -> io::Result<()> {
    for token in tokens {
        write!(out, "{}\t{}\t", token.pos(), token.kind().as_str())?;
        match token.kind() {
            TokenKind::Stream if !raw_stream => writeln!(out, "<{} bytes>", token.text().len())?,
            _ => {
                out.write_all(token.text())?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// JSON output
// ============================================================================

#[derive(Serialize)]
struct ObjectReport {
    objid: u32,
    genno: u32,
    pos: usize,
    #[serde(rename = "type")]
    kind: &'static str,
    value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<StreamReport>,
}

#[derive(Serialize)]
struct StreamReport {
    pos: usize,
    length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
}

#[derive(Serialize)]
struct XRefRow {
    objid: u32,
    offset: String,
    generation: String,
    flag: &'static str,
}

#[derive(Serialize)]
struct DocumentReport {
    file: String,
    objects: Vec<ObjectReport>,
    xref: Option<Vec<XRefRow>>,
    trailer: Option<serde_json::Value>,
    startxref: Option<u64>,
}

#[derive(Serialize)]
struct TokenReport {
    pos: usize,
    kind: &'static str,
    text: String,
}

/// Names and integers map to JSON scalars; strings and references are
/// tagged so they stay distinguishable from names and arrays.
fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(n) => json!(n),
        Value::Boolean(b) => json!(b),
        Value::Name(name) => json!(name),
        Value::LiteralString(s) => json!({ "string": String::from_utf8_lossy(s) }),
        Value::Reference(r) => json!({ "ref": [r.objid, r.genno] }),
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
        Value::Dictionary(dict) => dict_to_json(dict),
    }
}

fn dict_to_json(dict: &Dictionary) -> serde_json::Value {
    serde_json::Value::Object(
        dict.iter()
            .map(|(k, v)| (k.clone(), value_to_json(v)))
            .collect(),
    )
}

fn object_report(obj: &IndirectObject, raw_stream: bool) -> ObjectReport {
    let (kind, value, stream) = match &obj.body {
        ObjectBody::Dictionary(dict) => ("dictionary", dict_to_json(dict), None),
        ObjectBody::Array(arr) => (
            "array",
            serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
            None,
        ),
        ObjectBody::Stream(s) => {
            let data = s.get_data();
            let report = StreamReport {
                pos: s.pos(),
                length: data.len(),
                data: raw_stream.then(|| String::from_utf8_lossy(data).into_owned()),
            };
            ("stream", dict_to_json(&s.attrs), Some(report))
        }
    };
    ObjectReport {
        objid: obj.objid,
        genno: obj.genno,
        pos: obj.pos,
        kind,
        value,
        stream,
    }
}

fn document_report(path: &Path, doc: &Document, raw_stream: bool) -> DocumentReport {
    DocumentReport {
        file: path.display().to_string(),
        objects: doc
            .objects()
            .iter()
            .map(|obj| object_report(obj, raw_stream))
            .collect(),
        xref: doc.xref().map(|xref| {
            xref.iter()
                .map(|(objid, entry)| XRefRow {
                    objid,
                    offset: entry.offset_token().to_string(),
                    generation: entry.generation_token().to_string(),
                    flag: entry.flag().as_str(),
                })
                .collect()
        }),
        trailer: doc.trailer().map(|t| dict_to_json(&t.dict)),
        startxref: doc.startxref(),
    }
}

fn token_reports(tokens: &[Token], raw_stream: bool) -> Vec<TokenReport> {
    tokens
        .iter()
        .map(|t| TokenReport {
            pos: t.pos(),
            kind: t.kind().as_str(),
            text: match t.kind() {
                TokenKind::Stream if !raw_stream => format!("<{} bytes>", t.text().len()),
                _ => t.text_lossy().into_owned(),
            },
        })
        .collect()
}

// ============================================================================
// Command line
// ============================================================================

/// A command line tool for dumping the syntax of PDF files.
#[derive(Parser, Debug)]
#[command(name = "pdfdump")]
#[command(author, version, about = "Dump PDF syntax: objects, xref, trailer", long_about = None)]
struct Args {
    /// One or more paths to PDF files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print parse statistics to stderr
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: Format,

    /// Dump the token stream instead of the parsed document
    #[arg(long, action = ArgAction::SetTrue)]
    tokens: bool,

    /// Include stream contents in the output
    #[arg(short = 'r', long = "raw-stream", action = ArgAction::SetTrue)]
    raw_stream: bool,

    /// Maximum array/dictionary nesting depth
    #[arg(long = "max-depth", default_value_t = 64)]
    max_depth: usize,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

fn read_file(path: &Path) -> Result<Bytes> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("cannot map {}", path.display()))?;
    Ok(Bytes::from_owner(mmap))
}

fn dump_file<W: Write>(out: &mut W, path: &Path, args: &Args) -> Result<()> {
    let data = read_file(path)?;
    let len = data.len();
    let builder = ParserBuilder::new().max_depth(args.max_depth);

    if args.tokens {
        let tokens = builder
            .tokenize(data)
            .with_context(|| format!("failed to tokenize {}", path.display()))?;
        if args.debug {
            eprintln!("{}: {len} bytes, {} tokens", path.display(), tokens.len());
        }
        match args.format {
            Format::Text => dump_tokens_text(out, &tokens, args.raw_stream)?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut *out, &token_reports(&tokens, args.raw_stream))?;
                writeln!(out)?;
            }
        }
        return Ok(());
    }

    let doc = builder
        .parse(data)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if args.debug {
        eprintln!(
            "{}: {len} bytes, {} objects, xref: {}, trailer: {}",
            path.display(),
            doc.objects().len(),
            doc.xref().map_or(0, XRefTable::len),
            doc.trailer().is_some()
        );
    }
    match args.format {
        Format::Text => dump_text(out, &doc, args.raw_stream)?,
        Format::Json => {
            serde_json::to_writer_pretty(
                &mut *out,
                &document_report(path, &doc, args.raw_stream),
            )?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("cannot create {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    let many = args.files.len() > 1;
    for path in &args.files {
        if many && args.format == Format::Text {
            writeln!(output, "== {} ==", path.display())?;
        }
        dump_file(&mut output, path, &args)?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfsyntax_core::Reference;

    #[test]
    fn test_render_value_sorts_keys() {
        let mut dict = Dictionary::new();
        dict.insert("/Type".into(), Value::Name("/Page".into()));
        dict.insert("/Parent".into(), Value::Reference(Reference::new(2, 0)));
        dict.insert(
            "/Box".into(),
            Value::Array(vec![Value::Integer(0), Value::Integer(612)]),
        );
        assert_eq!(
            render_value(&Value::Dictionary(dict)),
            "<< /Box [0 612] /Parent 2 0 R /Type /Page >>"
        );
    }

    #[test]
    fn test_value_to_json_tags_strings_and_refs() {
        let value = Value::Array(vec![
            Value::LiteralString(b"hi".to_vec()),
            Value::Reference(Reference::new(7, 1)),
            Value::Boolean(false),
        ]);
        assert_eq!(
            value_to_json(&value),
            json!([{ "string": "hi" }, { "ref": [7, 1] }, false])
        );
    }
}
