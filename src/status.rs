use crate::slice::Slice;
use std::fmt;

// A Status encapsulates the result of an operation.  It may indicate
// success, or it may indicate an error with an associated error message.
//
// Multiple threads can invoke const methods on a Status without
// external synchronization, but if any of the threads may call a
// non-const method, all threads accessing the same Status must use
// external synchronization.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Code {
    NotFound = 1,
    Corruption = 2,
    NotSupported = 3,
    InvalidArgument = 4,
    IOError = 5,
}

// OK 不分配内存；错误时 code 加上拼接好的消息，消息缓冲是唯一的堆分配
#[derive(Clone, Debug)]
struct ErrorState {
    code: Code,
    message: Vec<u8>,
}

#[derive(Clone, Debug, Default)]
pub struct Status {
    state: Option<ErrorState>,
}

impl Status {
    /// Create a success status.
    pub fn ok() -> Self {
        Status { state: None }
    }

    pub fn not_found(msg: Slice<'_>, msg2: Slice<'_>) -> Self {
        Status::with_code(Code::NotFound, msg, msg2)
    }

    pub fn corruption(msg: Slice<'_>, msg2: Slice<'_>) -> Self {
        Status::with_code(Code::Corruption, msg, msg2)
    }

    pub fn not_supported(msg: Slice<'_>, msg2: Slice<'_>) -> Self {
        Status::with_code(Code::NotSupported, msg, msg2)
    }

    pub fn invalid_argument(msg: Slice<'_>, msg2: Slice<'_>) -> Self {
        Status::with_code(Code::InvalidArgument, msg, msg2)
    }

    pub fn io_error(msg: Slice<'_>, msg2: Slice<'_>) -> Self {
        Status::with_code(Code::IOError, msg, msg2)
    }

    // 消息是 msg，msg2 非空时再接 ": " 和 msg2
    fn with_code(code: Code, msg: Slice<'_>, msg2: Slice<'_>) -> Self {
        let extra = if msg2.is_empty() { 0 } else { 2 + msg2.size() };
        let mut message = Vec::with_capacity(msg.size() + extra);
        message.extend_from_slice(msg.data());
        if !msg2.is_empty() {
            message.extend_from_slice(b": ");
            message.extend_from_slice(msg2.data());
        }
        Status {
            state: Some(ErrorState { code, message }),
        }
    }

    /// Returns true iff the status indicates success.
    pub fn is_ok(&self) -> bool {
        self.state.is_none()
    }

    /// Returns true iff the status indicates a NotFound error.
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(Code::NotFound)
    }

    /// Returns true iff the status indicates a Corruption error.
    pub fn is_corruption(&self) -> bool {
        self.code() == Some(Code::Corruption)
    }

    /// Returns true iff the status indicates a NotSupported error.
    pub fn is_not_supported(&self) -> bool {
        self.code() == Some(Code::NotSupported)
    }

    /// Returns true iff the status indicates an InvalidArgument.
    pub fn is_invalid_argument(&self) -> bool {
        self.code() == Some(Code::InvalidArgument)
    }

    /// Returns true iff the status indicates an IOError.
    pub fn is_io_error(&self) -> bool {
        self.code() == Some(Code::IOError)
    }

    fn code(&self) -> Option<Code> {
        self.state.as_ref().map(|s| s.code)
    }
}

// Returns "OK" for success, otherwise the code name followed by
// ": " and the message.
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            None => write!(f, "OK"),
            Some(s) => {
                let kind = match s.code {
                    Code::NotFound => "NotFound",
                    Code::Corruption => "Corruption",
                    Code::NotSupported => "Not implemented",
                    Code::InvalidArgument => "Invalid argument",
                    Code::IOError => "IO error",
                };
                write!(f, "{}: {}", kind, String::from_utf8_lossy(&s.message))
            }
        }
    }
}

impl From<std::io::Error> for Status {
    fn from(e: std::io::Error) -> Self {
        let msg = e.to_string();
        Status::io_error(Slice::new(msg.as_bytes()), Slice::default())
    }
}
