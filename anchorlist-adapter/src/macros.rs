/// `alog!(level, fields..., "message")`: forwards to `tracing::<level>!` under the
/// `anchorlist_adapter` target. The statement is compiled out without the `tracing` feature, so the
/// arguments are not evaluated either.
macro_rules! alog {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "anchorlist_adapter", $($arg)+);
    };
}
