use crate::server::content::QueryClient;

#[derive(Clone)]
pub struct AppState {
    pub content: QueryClient,
}
