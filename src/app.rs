use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{
    kopokopo_callback_handler, prompt_handler, receive_data_handler, stk_push_handler,
};

pub const RECEIVE_DATA_PATH: &str = "/api/receive-data";
pub const KOPOKOPO_CALLBACK_PATH: &str = "/kopokopo/v1/kopokopo_callback";
pub const STK_PUSH_PATH: &str = "/kopokopo/v1/stk_push";

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn router(self) -> Router {
        Router::new()
            .route(
                RECEIVE_DATA_PATH,
                get(prompt_handler).post(receive_data_handler),
            )
            .route(
                KOPOKOPO_CALLBACK_PATH,
                get(kopokopo_callback_handler).post(kopokopo_callback_handler),
            )
            .route(STK_PUSH_PATH, post(stk_push_handler))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
