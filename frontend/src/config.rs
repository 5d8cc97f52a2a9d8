pub struct Config;

impl Config {
    /// Prefix for API calls. Empty means relative URLs: the dev server and the
    /// production reverse proxy both forward `/api/` to the backend.
    pub fn api_base_url() -> String {
        option_env!("API_BASE_URL").unwrap_or("").trim_end_matches('/').to_string()
    }

    /// Rows per table page unless a page asks for something else.
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    /// Page links shown either side of the current page.
    pub const PAGER_RADIUS: u32 = 2;
}
