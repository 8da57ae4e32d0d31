use bytes::BufMut;
use tracing::trace;

use crate::errors::Error as HttpError;
use crate::grammar::is_field_value;
use crate::headers::HeaderArg;
use crate::response::Response;
use crate::status::StatusCode;

/// Entry point that emits the status line and headers of a response.
pub type WriteHeadFn =
    Box<dyn FnMut(&mut Response, WriteHead) -> Result<(), HttpError>>;

/// Arguments of a write-head call: `(status)`, `(status, headers)` or
/// `(status, reason, headers)`.
#[derive(Clone, Debug, PartialEq)]
pub struct WriteHead {
    pub status: u16,
    pub reason: Option<String>,
    pub headers: Option<HeaderArg>,
}

impl WriteHead {
    pub fn new(status: u16) -> Self {
        WriteHead {
            status,
            reason: None,
            headers: None,
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn headers(mut self, headers: impl Into<HeaderArg>) -> Self {
        self.headers = Some(headers.into());
        self
    }

    /// Split off the headers argument, leaving only the leading arguments.
    pub fn split_headers(self) -> (WriteHead, Option<HeaderArg>) {
        let headers = self.headers;
        let leading = WriteHead {
            status: self.status,
            reason: self.reason,
            headers: None,
        };

        (leading, headers)
    }
}

/// The entry point a fresh `Response` starts with: serializes the head into
/// the response's outgoing buffer.
pub(crate) fn default_write_head(
    res: &mut Response,
    args: WriteHead,
) -> Result<(), HttpError> {
    if res.headers_sent {
        return Err(HttpError::HeadersSent);
    }

    if !StatusCode::is_valid(args.status) {
        return Err(HttpError::InvalidStatusCode(args.status));
    }

    let (args, headers) = args.split_headers();

    let reason = match args.reason {
        Some(reason) => reason,
        None => match res.status_message.clone() {
            Some(message) => message,
            None => StatusCode::reason(args.status)
                .unwrap_or("unknown")
                .to_string(),
        },
    };

    if !is_field_value(reason.as_bytes()) {
        return Err(HttpError::InvalidArgument(format!(
            "reason phrase {:?}",
            reason
        )));
    }

    if let Some(headers) = headers {
        for (name, value) in headers.into_lines() {
            res.set_header(name, value)?;
        }
    }

    res.status_code = args.status;

    let out = &mut res.output;
    out.put_slice(format!("HTTP/1.1 {} {}\r\n", args.status, reason).as_bytes());
    for (name, value) in res.headers.iter() {
        out.put_slice(name.as_bytes());
        out.put_slice(b": ");
        out.put_slice(value.as_bytes());
        out.put_slice(b"\r\n");
    }
    out.put_slice(b"\r\n");

    trace!(
        status = args.status,
        headers = res.headers.len(),
        "response head written"
    );

    res.status_message = Some(reason);
    Ok(())
}
