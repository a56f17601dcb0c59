use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtoError {
    #[error("Protobuf decode error: {0}")]
    ProtobufDecode(#[from] prost::DecodeError),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

pub type ProtoResult<T> = Result<T, ProtoError>;
