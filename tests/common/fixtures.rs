//! Static reqlog corpora used across harnesses.

/// Gateway lines as they appear in production: a search on the 12-field
/// layout and a bulk post on the 14-field layout.
pub const CORPUS_GATEWAY: &[&str] = &[
    "REQ\tLogService\t14773877470553448\tGET\t/v5/repos/qcos_nq_pod_2147832099/search\t{\"Accept-Encoding\":\"gzip\",\"Host\":\"logdb.qiniu.com\",\"IP\":\"127.0.0.1\",\"X-Reqid\":\"Jz2owFFl4yUPWBIA\",\"X-Scheme\":\"https\"}\t\t200\t{\"Content-Length\":\"4362\",\"Content-Type\":\"application/json\",\"X-Appid\":\"1380793874\",\"X-Log\":[\"LogService:10\"],\"X-Operation\":\"V5_SearchData\",\"X-Repo\":\"qcos_nq_pod_2147832099\",\"X-Reqid\":\"Jz2owFFl4yUPWBIA\"}\t\t4362\t991596",
    "REQ\tLogService\t15000182611599302\tPOST\t/v5/repos/kodo_z0_req_ebdmaster/data\t{\"Accept-Encoding\":\"gzip\",\"Content-Type\":\"application/json\",\"Host\":\"192.168.76.51:13265\",\"X-Reqid\":\"gm8AAOWGuzupItEU\",\"bs\":1486821}\t\t200\t{\"Content-Length\":\"51\",\"Content-Type\":\"application/json\",\"X-Appid\":\"1380921591\",\"X-Operation\":\"V5_PostData\",\"X-Repo\":\"kodo_z0_req_ebdmaster\",\"X-Req-Bodylength\":\"1486821\"}\t{\"success\":1950,\"failed\":0,\"total\":1950,\"items\":[]}\t51\t12622979\t\t",
];

/// Lines every parser must reject, one per failure kind plus the empty line.
pub const CORPUS_INVALID: &[&str] = &[
    "",
    "not-a-valid-line",
    "REQ\ttoo\tfew\tfields",
    "REQUEST\ta\tb\tc\td\te\tf\tg\th\ti\tj\tk",
];

/// `n` valid lines spread over three apps and a few windows, for throughput
/// and concurrency tests.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let app = format!("app{}", i % 3);
            let seconds = 1_500_000_000 + (i as i64 % 7) * 120;
            super::flow_line(&app, "repoA", seconds, (i % 100) as u64)
        })
        .collect()
}
