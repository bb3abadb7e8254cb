//! The `UploadModuleFile` client stream. The first request carries a [ModuleFileInfo] and every
//! following request carries a chunk of the module archive, in order.

use thiserror::Error;

use crate::proto::app::v1::{
    upload_module_file_request::ModuleFile, ModuleFileInfo, UploadModuleFileRequest,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModuleFileError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,
    #[error("upload stream is empty")]
    EmptyStream,
    #[error("upload stream must start with the module file info")]
    MissingFileInfo,
    #[error("request {0} repeats the module file info")]
    DuplicateFileInfo(usize),
    #[error("request {0} has neither file info nor file contents")]
    EmptyRequest(usize),
}

/// Which member of the `module_file` oneof is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ModuleFileCase {
    NotSet = 0,
    ModuleFileInfo = 1,
    File = 2,
}

impl UploadModuleFileRequest {
    pub fn module_file_case(&self) -> ModuleFileCase {
        match self.module_file {
            None => ModuleFileCase::NotSet,
            Some(ModuleFile::ModuleFileInfo(_)) => ModuleFileCase::ModuleFileInfo,
            Some(ModuleFile::File(_)) => ModuleFileCase::File,
        }
    }

    /// Setting one member clears the other.
    pub fn set_module_file_info(&mut self, info: ModuleFileInfo) -> &mut Self {
        self.module_file = Some(ModuleFile::ModuleFileInfo(info));
        self
    }

    pub fn set_file(&mut self, data: Vec<u8>) -> &mut Self {
        self.module_file = Some(ModuleFile::File(data));
        self
    }

    pub fn module_file_info(&self) -> Option<&ModuleFileInfo> {
        match &self.module_file {
            Some(ModuleFile::ModuleFileInfo(info)) => Some(info),
            _ => None,
        }
    }

    /// Empty when the file member is not the one set.
    pub fn file(&self) -> &[u8] {
        match &self.module_file {
            Some(ModuleFile::File(data)) => data,
            _ => &[],
        }
    }

    pub fn has_module_file_info(&self) -> bool {
        self.module_file_case() == ModuleFileCase::ModuleFileInfo
    }

    pub fn has_file(&self) -> bool {
        self.module_file_case() == ModuleFileCase::File
    }

    pub fn clear_module_file(&mut self) -> &mut Self {
        self.module_file = None;
        self
    }
}

/// Splits `data` into the requests of one upload. Empty `data` yields the info request alone.
pub fn upload_requests(
    info: ModuleFileInfo,
    data: &[u8],
    chunk_size: usize,
) -> Result<Vec<UploadModuleFileRequest>, ModuleFileError> {
    if chunk_size == 0 {
        return Err(ModuleFileError::ZeroChunkSize);
    }
    let mut requests = Vec::with_capacity(1 + data.len().div_ceil(chunk_size));
    requests.push(UploadModuleFileRequest {
        module_file: Some(ModuleFile::ModuleFileInfo(info)),
    });
    requests.extend(data.chunks(chunk_size).map(|chunk| UploadModuleFileRequest {
        module_file: Some(ModuleFile::File(chunk.to_vec())),
    }));
    log::debug!(
        "split {} bytes into {} upload requests",
        data.len(),
        requests.len()
    );
    Ok(requests)
}

pub fn reassemble<I>(requests: I) -> Result<(ModuleFileInfo, Vec<u8>), ModuleFileError>
where
    I: IntoIterator<Item = UploadModuleFileRequest>,
{
    let mut requests = requests.into_iter();
    let info = match requests.next() {
        None => return Err(ModuleFileError::EmptyStream),
        Some(UploadModuleFileRequest {
            module_file: Some(ModuleFile::ModuleFileInfo(info)),
        }) => info,
        Some(_) => return Err(ModuleFileError::MissingFileInfo),
    };
    let mut data = vec![];
    for (index, request) in requests.enumerate() {
        match request.module_file {
            Some(ModuleFile::File(chunk)) => data.extend_from_slice(&chunk),
            Some(ModuleFile::ModuleFileInfo(_)) => {
                return Err(ModuleFileError::DuplicateFileInfo(index + 1))
            }
            None => return Err(ModuleFileError::EmptyRequest(index + 1)),
        }
    }
    Ok((info, data))
}
