//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;

/// Type alias for Kotoba errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring while reading a corpus
#[derive(Debug)]
pub enum Error {
    MalformedDocument(String, String),
    DocumentRead(String, io::Error),
    MissingCorpus(String, Option<io::Error>),
    IOError(io::Error),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MalformedDocument(ref doc, ref info) => {
                write!(f, "Malformed document {}: {}", doc, info)
            },
            Error::DocumentRead(ref doc, ref err) => {
                write!(f, "Error reading document {}: {}", doc, err)
            },
            Error::MissingCorpus(ref dir, ref opt_err) => {
                write!(f,
                    "The corpus directory {} must already exist at this point but there was a \
                    problem opening it. Wrong directory? The OS error was: ",
                    dir)?;
                if let &Some(ref err) = opt_err { err.fmt(f) }
                else { write!(f, "Unknown") }
            },
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Error::MalformedDocument(_, _) => "Can't parse an annotated document in the corpus",
            Error::DocumentRead(_, _) => "Can't read a document from the corpus",
            Error::MissingCorpus(_, _) => "Can't open the corpus directory",
            Error::IOError(ref err) => err.description(),
            Error::Other(ref info) => info,
        }
    }

    fn cause(&self) -> Option<&error::Error> {
        match *self {
            Error::MalformedDocument(_, _) => None,
            Error::DocumentRead(_, ref err) => Some(err),
            Error::MissingCorpus(_, _) => None,
            Error::IOError(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
