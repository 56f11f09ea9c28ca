//! Test fixtures for the CSV tokenizer
//!
//! Shared sample documents used across the tokenizer test modules.


/// Helper to build an owned row from string slices
pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// A portfolio export exercising quoting, blank lines and a ragged row
pub fn create_sample_portfolio_csv() -> String {
    concat!(
        "name,industry,status,url,year\r\n",
        "Acme Robotics,Robotics,Invested,acme.io,2020\r\n",
        "\r\n",
        "\"Fjord, Ltd\",\"Shipping\",exited,https://fjord.no,2015\r\n",
        "\"The \"\"Quote\"\" Co\",Media,closed,,\r\n",
        "Ragged Inc,Fintech\r\n",
    )
    .to_string()
}
