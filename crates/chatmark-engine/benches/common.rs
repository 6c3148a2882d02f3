// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply_content(size: usize) -> String {
    let base = "## Results\n\nSpend is **up** and CTR is *flat*, see [report](https://example.com).\n\n- Bullet point\n  - Nested `item`\n1. First step\n\n| Keyword | Clicks |\n|---|---|\n| shoes | 120 |\n| boots | 45 |\n\n```sql\nSELECT * FROM campaigns;\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_chart_reply(charts: usize) -> String {
    let mut content = String::new();

    for i in 0..charts {
        content.push_str(&format!("Chart {i} below:\n"));
        content.push_str("[CHART]\n");
        content.push_str(&format!(
            "{{\"type\":\"bar\",\"title\":\"Chart {i}\",\"data\":[{{\"name\":\"A\",\"spend\":{}}},{{\"name\":\"B\",\"spend\":{}}}],\"xKey\":\"name\"}}\n",
            i * 10,
            i * 5
        ));
        content.push_str("[/CHART]\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_wide_table(rows: usize, columns: usize) -> String {
    let row = |prefix: &str| {
        let cells: Vec<_> = (0..columns).map(|c| format!("{prefix}{c}, \"q\"")).collect();
        format!("| {} |\n", cells.join(" | "))
    };

    let mut content = row("h");
    content.push_str(&format!("|{}\n", "---|".repeat(columns)));
    for r in 0..rows {
        content.push_str(&row(&format!("r{r}c")));
    }
    content
}
