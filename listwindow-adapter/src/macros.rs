#[cfg(feature = "tracing")]
macro_rules! latrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listwindow_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! latrace {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(feature = "tracing")]
macro_rules! ladebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "listwindow_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ladebug {
    ($($tt:tt)*) => {
        ()
    };
}
