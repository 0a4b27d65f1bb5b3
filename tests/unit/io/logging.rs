//! Tests for log filter selection

#[cfg(test)]
mod tests {
    use weavelab::io::logging::{default_directive, init_logging};

    // Tests each verbosity level maps to a crate filter
    // Verified by swapping the debug and trace levels
    #[test]
    fn test_verbosity_directives() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "weavelab=info");
        assert_eq!(default_directive(2, false), "weavelab=debug");
        assert_eq!(default_directive(3, false), "weavelab=trace");
        assert_eq!(default_directive(9, false), "weavelab=trace");
    }

    // Tests quiet overrides any verbosity
    // Verified by checking verbosity before quiet
    #[test]
    fn test_quiet_wins() {
        assert_eq!(default_directive(0, true), "error");
        assert_eq!(default_directive(3, true), "error");
    }

    // Tests a second installation is reported rather than failing
    // Verified by unwrapping the second try_init
    #[test]
    fn test_init_twice() {
        let _ = init_logging(0, true);
        assert!(!init_logging(0, true));
    }
}
