use tracing::{debug, trace};

use crate::errors::Error as HttpError;
use crate::response::{Response, WriteHead, WriteHeadFn};

/// Execute `listener` when `res` is about to write its headers.
///
/// The listener runs once, right before the head is emitted, and may change
/// the status code or headers. Listeners registered later run first.
///
/// Fails with `InvalidArgument` when the response's write-head entry point
/// cannot be wrapped, which is the case while a head is being written (for
/// instance when called from inside another listener).
pub fn on_headers<F>(res: &mut Response, listener: F) -> Result<(), HttpError>
where
    F: FnOnce(&mut Response) -> Result<(), HttpError> + 'static,
{
    res.replace_write_head(|prev| create_write_head(prev, listener))
        .map_err(|_| {
            HttpError::InvalidArgument(String::from(
                "response write head is in use",
            ))
        })?;

    debug!("headers listener registered");
    Ok(())
}

fn create_write_head<F>(mut prev: WriteHeadFn, listener: F) -> WriteHeadFn
where
    F: FnOnce(&mut Response) -> Result<(), HttpError> + 'static,
{
    // taken on first call
    let mut listener = Some(listener);

    Box::new(move |res: &mut Response, args: WriteHead| {
        let mut args = set_write_head_headers(res, args)?;

        if let Some(listener) = listener.take() {
            trace!(status = args.status, "firing headers listener");
            listener(res)?;

            // pass-along an updated status code
            if args.status != res.status_code() {
                debug!(
                    from = args.status,
                    to = res.status_code(),
                    "headers listener changed status code"
                );
                args.status = res.status_code();
                args.reason = None;
            }
        }

        prev(res, args)
    })
}

/// Apply the status and headers of a write-head call to the response and
/// return the leading arguments.
fn set_write_head_headers(
    res: &mut Response,
    args: WriteHead,
) -> Result<WriteHead, HttpError> {
    let (args, headers) = args.split_headers();

    res.set_status_code(args.status);

    if let Some(headers) = headers {
        for (name, value) in headers.into_lines() {
            res.set_header(name, value)?;
        }
    }

    Ok(args)
}
