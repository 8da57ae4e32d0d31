use std::convert::From;
use std::{fmt, io};

impl From<Error> for io::Error {
    fn from(f: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, f)
    }
}

macro_rules! errors {
    (
        [
            $(
                $(#[$docs1:meta])*
                ($name1:ident, $phrase1:expr);
            )+
        ],
        [
            $(
                $(#[$docs2:meta])*
                ($name2:ident, $type:ty, $phrase2:expr);
            )+
        ]
    ) => {
        #[derive(Clone, Debug, PartialEq)]
        pub enum Error {
            $(
                $(#[$docs1])*
                $name1,
            )+
            $(
                $(#[$docs2])*
                $name2($type),
            )+
        }

        impl Error {
            fn desc(&self) -> String {
                match &*self {
                    $(
                        Error::$name1 => String::from($phrase1),
                    )+
                    $(
                        Error::$name2(val) => format!("{}: {:?}", $phrase2, val),
                    )+
                }
            }
        }

        impl fmt::Display for Error {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.desc())
            }
        }

        impl std::error::Error for Error {}
    };
}

errors! {
    [
        /// The head was already serialized, headers can no longer change.
        (HeadersSent, "Cannot set headers after they are sent to the client");
        /// `write_head` was called again while an entry point was running.
        (WriteHeadInProgress, "Write head called while a write head is in progress");
        (WriteAfterEnd, "Write after end");
    ],
    [
        (InvalidArgument, String, "Invalid argument");
        (InvalidStatusCode, u16, "Invalid status code");
        (InvalidHeaderName, String, "Invalid header name");
        (InvalidHeaderValue, String, "Invalid header value");
    ]
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::io;

    #[test]
    fn test_error_phrases() {
        assert_eq!(
            Error::InvalidArgument(String::from("listener")).to_string(),
            "Invalid argument: \"listener\""
        );
        assert_eq!(
            Error::InvalidStatusCode(42).to_string(),
            "Invalid status code: 42"
        );
        assert_eq!(Error::WriteAfterEnd.to_string(), "Write after end");
    }

    #[test]
    fn test_into_io_error() {
        let error: io::Error = Error::HeadersSent.into();
        assert_eq!(error.kind(), io::ErrorKind::InvalidData);
        assert_eq!(
            error.to_string(),
            "Cannot set headers after they are sent to the client"
        );
    }
}
