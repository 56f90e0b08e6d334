use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

#[derive(Serialize, Debug, Clone)]
pub struct WordRecord {
    pub word: String,
}

pub trait OutputWriter: Send + Sync {
    fn write(&self, r: &WordRecord) -> Result<()>;
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

fn open_sink(path: PathBuf, gzip: bool, append: bool) -> Result<Mutex<Box<dyn Write + Send>>> {
    let mut oo = OpenOptions::new();
    oo.create(true).write(true);
    if append {
        oo.append(true);
    } else {
        oo.truncate(true);
    }
    let f = oo.open(path)?;
    let w: Box<dyn Write + Send> = if gzip {
        Box::new(GzEncoder::new(f, Compression::default()))
    } else {
        Box::new(f)
    };
    Ok(Mutex::new(w))
}

pub struct PlainWriter {
    file: Option<Mutex<Box<dyn Write + Send>>>,
    to_stdout: bool,
}

impl PlainWriter {
    pub fn new(path: Option<PathBuf>, to_stdout: bool, gzip: bool, append: bool) -> Result<Self> {
        let file = match path {
            Some(p) => Some(open_sink(p, gzip, append)?),
            None => None,
        };
        Ok(PlainWriter { file, to_stdout })
    }
}

impl OutputWriter for PlainWriter {
    fn write(&self, r: &WordRecord) -> Result<()> {
        if self.to_stdout {
            println!("{}", r.word);
        }
        if let Some(f) = &self.file {
            let mut guard = f.lock().unwrap();
            writeln!(guard, "{}", r.word)?;
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(f) = &self.file {
            f.lock().unwrap().flush()?;
        }
        Ok(())
    }
}

pub struct JsonLinesWriter {
    file: Option<Mutex<Box<dyn Write + Send>>>,
    to_stdout: bool,
}

impl JsonLinesWriter {
    pub fn new(path: Option<PathBuf>, to_stdout: bool, gzip: bool, append: bool) -> Result<Self> {
        let file = match path {
            Some(p) => Some(open_sink(p, gzip, append)?),
            None => None,
        };
        Ok(JsonLinesWriter { file, to_stdout })
    }
}

impl OutputWriter for JsonLinesWriter {
    fn write(&self, r: &WordRecord) -> Result<()> {
        let line = serde_json::to_string(r)?;
        if self.to_stdout {
            println!("{}", line);
        }
        if let Some(f) = &self.file {
            let mut guard = f.lock().unwrap();
            writeln!(guard, "{}", line)?;
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        if let Some(f) = &self.file {
            f.lock().unwrap().flush()?;
        }
        Ok(())
    }
}

pub fn build_writers(
    path: Option<PathBuf>,
    output_type: &str,
    to_stdout: bool,
    gzip: bool,
    append: bool,
) -> Result<Vec<Box<dyn OutputWriter>>> {
    let mut v: Vec<Box<dyn OutputWriter>> = Vec::new();
    match output_type {
        "txt" => {
            v.push(Box::new(PlainWriter::new(path, to_stdout, gzip, append)?));
        }
        "json" | "jsonl" => {
            if path.is_none() && !to_stdout {
                return Err(anyhow::anyhow!(
                    "jsonl output requires either --output path or enable stdout (omit --not-print)"
                ));
            }
            v.push(Box::new(JsonLinesWriter::new(path, to_stdout, gzip, append)?));
        }
        other => {
            return Err(anyhow::anyhow!("unsupported output type: {}", other));
        }
    }
    Ok(v)
}
