use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResponsiveError {
    #[error("arrays are not valid responsive values; use a breakpoint map")]
    ArrayValue,

    #[error("unknown breakpoint key `{0}` in responsive value")]
    UnknownBreakpoint(String),

    #[error("responsive props must be an object")]
    NotAnObject,

    #[error("invalid responsive prop `{key}`: {source}")]
    Prop {
        key: String,
        #[source]
        source: Box<ResponsiveError>,
    },
}
