use thiserror::Error;

/// Contract violations detected by the combinators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinatorError {
    /// A curried function was given more arguments than its arity.
    #[error("curried function of arity {arity} received {supplied} arguments")]
    TooManyArguments {
        /// The declared arity.
        arity: usize,
        /// The number of arguments collected, including the rejected step.
        supplied: usize,
    },
    /// A completed call was given more arguments.
    #[error("curried function already ran and received {supplied} more arguments")]
    AlreadyComplete {
        /// The number of arguments in the rejected step.
        supplied: usize,
    },
}
