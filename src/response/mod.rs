use bytes::{BufMut, Bytes, BytesMut};
use paste::paste;
use std::fmt;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::trace;

use crate::errors::Error as HttpError;
use crate::headers::{
    Headers, CONTENT_LENGTH_HEADER_NAME, CONTENT_TYPE_HEADER_NAME,
    LOCATION_HEADER_NAME,
};
use crate::status::StatusCode;

mod write_head;
use write_head::default_write_head;
pub use write_head::*;

macro_rules! header_accessors {
    ($(
        $(#[$docs:meta])*
        ($name:ident, $header:expr);
    )*) => {
        $(
            paste! {
                $(#[$docs])*
                pub fn $name(&self) -> Option<&str> {
                    self.get_header($header)
                }

                pub fn [<set_ $name>](
                    &mut self,
                    value: impl Into<String>,
                ) -> Result<(), HttpError> {
                    self.set_header($header, value)
                }
            }
        )*
    };
}

/// An outbound HTTP response in flight.
///
/// The head is emitted through a replaceable entry point, so callers can
/// wrap it (see [`on_headers`](fn@crate::on_headers)). Emitted bytes are
/// buffered until [`Response::take_output`] or [`Response::write_to`].
pub struct Response {
    status_code: u16,
    status_message: Option<String>,
    headers: Headers,
    headers_sent: bool,
    finished: bool,
    write_head: Option<WriteHeadFn>,
    output: BytesMut,
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status_code", &self.status_code)
            .field("status_message", &self.status_message)
            .field("headers", &self.headers)
            .field("headers_sent", &self.headers_sent)
            .field("finished", &self.finished)
            .finish()
    }
}

impl Default for Response {
    fn default() -> Self {
        Response::new()
    }
}

impl Response {
    pub fn new() -> Self {
        Response::with_write_head(Box::new(default_write_head))
    }

    /// A response whose head is emitted by `write_head` instead of being
    /// serialized into the outgoing buffer.
    pub fn with_write_head(write_head: WriteHeadFn) -> Self {
        Response {
            status_code: StatusCode::OK.as_u16(),
            status_message: None,
            headers: Headers::new(),
            headers_sent: false,
            finished: false,
            write_head: Some(write_head),
            output: BytesMut::new(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn set_status_code(&mut self, code: u16) {
        self.status_code = code;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    pub fn header_names(&self) -> Vec<&str> {
        self.headers.names().collect()
    }

    pub fn set_header(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), HttpError> {
        if self.headers_sent {
            return Err(HttpError::HeadersSent);
        }

        let name = name.into();
        let value = value.into();
        Headers::validate(&name, &value)?;
        self.headers.set(name, value);
        Ok(())
    }

    pub fn remove_header(
        &mut self,
        name: &str,
    ) -> Result<Option<String>, HttpError> {
        if self.headers_sent {
            return Err(HttpError::HeadersSent);
        }

        Ok(self.headers.remove(name))
    }

    header_accessors! {
        (content_type, CONTENT_TYPE_HEADER_NAME);
        /// Target of a redirect.
        (location, LOCATION_HEADER_NAME);
    }

    pub fn content_length(&self) -> Option<usize> {
        self.get_header(CONTENT_LENGTH_HEADER_NAME)
            .and_then(|v| v.trim().parse::<usize>().ok())
    }

    pub fn headers_sent(&self) -> bool {
        self.headers_sent
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Emit the status line and headers through the current entry point.
    ///
    /// The entry point is detached while it runs, a nested call fails with
    /// `WriteHeadInProgress`. Once it returns `Ok` the head counts as sent.
    pub fn write_head(&mut self, args: WriteHead) -> Result<(), HttpError> {
        let mut entry = self
            .write_head
            .take()
            .ok_or(HttpError::WriteHeadInProgress)?;
        let result = entry(self, args);
        self.write_head = Some(entry);

        if result.is_ok() {
            self.headers_sent = true;
        }
        result
    }

    /// Swap the write-head entry point for one built around it.
    pub fn replace_write_head<F>(&mut self, wrap: F) -> Result<(), HttpError>
    where
        F: FnOnce(WriteHeadFn) -> WriteHeadFn,
    {
        let prev = self
            .write_head
            .take()
            .ok_or(HttpError::WriteHeadInProgress)?;
        self.write_head = Some(wrap(prev));
        Ok(())
    }

    fn implicit_head(&mut self) -> Result<(), HttpError> {
        if self.headers_sent {
            return Ok(());
        }

        trace!(status = self.status_code, "implicit response head");
        self.write_head(WriteHead::new(self.status_code))
    }

    /// Append body bytes, writing the head first if it was not written yet.
    /// Without a `content-length` the body is delimited by connection close.
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), HttpError> {
        if self.finished {
            return Err(HttpError::WriteAfterEnd);
        }

        self.implicit_head()?;
        self.output.put_slice(chunk);
        Ok(())
    }

    /// Finish the response with a last body chunk.
    pub fn end(&mut self, body: &[u8]) -> Result<(), HttpError> {
        if self.finished {
            return Err(HttpError::WriteAfterEnd);
        }

        if !self.headers_sent && !self.has_header(CONTENT_LENGTH_HEADER_NAME) {
            let length = body.len().to_string();
            self.set_header(CONTENT_LENGTH_HEADER_NAME, length)?;
        }

        self.implicit_head()?;
        self.output.put_slice(body);
        self.finished = true;
        Ok(())
    }

    /// Drain everything emitted so far.
    pub fn take_output(&mut self) -> Bytes {
        self.output.split().freeze()
    }

    pub async fn write_to<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let output = self.take_output();
        writer.write_all(&output).await?;
        writer.flush().await
    }
}
