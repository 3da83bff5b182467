use std::{
    error::Error,
    ffi::OsStr,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use flate2::read::MultiGzDecoder;

pub fn is_compressed<P: AsRef<Path>>(p: &P) -> bool {
    p.as_ref().extension() == Some(OsStr::new("gz"))
}

/// Opens `input` for line reading. `None` or `-` reads stdin, and a `.gz`
/// file is decompressed on the fly.
pub fn read_with_gz<P: AsRef<Path>>(input: Option<&P>) -> Result<Box<dyn BufRead>, Box<dyn Error>> {
    let path: &Path = match input {
        Some(path) => path.as_ref(),
        None => Path::new("-"),
    };

    if path == Path::new("-") {
        debug!("reading from stdin");
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(path)?;
    if is_compressed(&path) {
        debug!("reading gzip input {}", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        debug!("reading {}", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}
