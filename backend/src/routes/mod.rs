pub mod dashboard;
pub mod overview;
pub mod ranking;
pub mod summary;
pub mod trends;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Route paths are nested under /v1 by the router
        assert_eq!(super::dashboard::GET_DASHBOARD, "/dashboard");
        assert_eq!(super::trends::GET_TRENDS, "/trends");
        assert_eq!(super::summary::GET_SUMMARY, "/summary");
        assert_eq!(super::ranking::GET_TOP_PAINTINGS, "/paintings/top");
        assert_eq!(
            super::ranking::GET_PAINTING_COMPARISON,
            "/paintings/comparison"
        );
    }
}
