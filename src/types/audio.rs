/// Binary audio content handed to a transcription call.
///
/// The library does no file I/O; whoever owns the audio (a download handler,
/// a message queue consumer) reads the bytes and wraps them here. The file
/// name travels with the upload so the provider can infer the audio format.
#[derive(Debug, Clone)]
pub struct AudioSource {
    file_name: String,
    bytes: Vec<u8>,
}

impl AudioSource {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        AudioSource {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.file_name, self.bytes)
    }
}
