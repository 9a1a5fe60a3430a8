pub mod kopokopo_callback;
pub mod receive_data;
pub mod stk_push;

pub use kopokopo_callback::kopokopo_callback_handler;
pub use receive_data::{prompt_handler, receive_data_handler};
pub use stk_push::stk_push_handler;
