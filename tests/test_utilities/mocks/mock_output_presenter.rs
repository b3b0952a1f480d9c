use sbom_formatter::prelude::*;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that pulls fixed-size chunks and keeps the bytes
#[derive(Clone)]
pub struct MockOutputPresenter {
    pub chunk_size: usize,
    pub output: Arc<Mutex<Vec<u8>>>,
}

impl MockOutputPresenter {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            output: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn output(&self) -> Vec<u8> {
        self.output.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &mut dyn Read) -> Result<u64> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut total = 0u64;
        loop {
            let n = content.read(&mut buf).map_err(|e| match SbomError::from_io(&e) {
                Some(err) => anyhow::Error::from(err),
                None => anyhow::Error::from(e),
            })?;
            if n == 0 {
                return Ok(total);
            }
            self.output.lock().unwrap().extend_from_slice(&buf[..n]);
            total += n as u64;
        }
    }
}
