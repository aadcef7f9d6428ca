//! Asynchronous combinators and cancellation-aware waiting.
//!
//! Requires the `async` feature.
//!
//! - [`OptionAsyncExt`], [`ResultAsyncExt`]: `fold_async`, `map_async`,
//!   `and_then_async` (and `map_err_async` for results)
//! - `ResultOption::{fold_async, map_async, and_then_async}`
//! - [`CancellationToken`], [`wait_cancellable`], [`CancellableExt`]: Race
//!   an awaitable against a cancellation signal
//!
//! Suspension only ever happens inside a handler the caller supplied. Handlers
//! run at most once, in the order the chain is composed.
//!
//! # Examples
//!
//! ```rust
//! use outcomes::effect::{CancellableExt, CancellationToken, OptionAsyncExt};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let token = CancellationToken::new();
//!
//! let lookup = Some(3)
//!     .and_then_async(|id| async move { if id == 3 { Some("ada") } else { None } })
//!     .with_cancellation(&token)
//!     .await;
//!
//! assert_eq!(lookup, Ok(Some("ada")));
//! # });
//! ```

mod cancellation;
mod combinators;

pub use cancellation::{CancellableExt, Cancellable, CancellationToken, Cancelled, wait_cancellable};
pub use combinators::{OptionAsyncExt, ResultAsyncExt};
