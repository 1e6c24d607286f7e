use thiserror::Error;

/// Error types for `TripletDeque` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DequeError {
    /// The deque already holds its maximum number of elements
    #[error("Capacity exceeded: deque is full at its maximum of {max_size} elements")]
    CapacityExceeded {
        /// Element bound fixed at construction
        max_size: usize,
    },
    /// Operation requires at least one element
    #[error("Empty container: the deque holds no elements")]
    EmptyContainer,
    /// Elements cannot be removed through a traversal handle
    #[error("Unsupported mutation: removal through an iterator is not supported")]
    UnsupportedMutation,
    /// Invalid parameter provided to `TripletDeque::with_max_size`
    #[error("Invalid configuration: {parameter} cannot be {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
    /// Destination slice cannot hold every element
    #[error("Destination too small: {required} slots required, {provided} slots provided")]
    DestinationTooSmall {
        /// Number of elements in the deque
        required: usize,
        /// Length of the destination slice
        provided: usize,
    },
}
