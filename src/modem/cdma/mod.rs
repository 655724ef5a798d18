//! CDMA actions (`--cdma-*` options)

mod commands;
mod context;

pub use commands::{
    wait_for_completion, CdmaHandler, OperationDone, WaitOutcome, ACTIVATED_MESSAGE,
    INTERRUPT_LOG_LEVEL,
};
pub use context::{InvocationContext, ManagerConnection};
