#[cfg(test)]
mod tests {
    use crate::fetch::Fetcher;
    use crate::pipeline::run;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_page(server: &MockServer, route: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_every_url_lands_in_exactly_one_collection() {
        let server = MockServer::start().await;
        mock_page(&server, "/ok", 200, "<p>jane@ok.example</p>").await;
        mock_page(&server, "/empty", 200, "<p>nothing to see</p>").await;
        mock_page(&server, "/missing", 404, "").await;

        let urls = vec![
            format!("{}/ok", server.uri()),
            format!("{}/empty", server.uri()),
            format!("{}/missing", server.uri()),
        ];
        let fetcher = Fetcher::new().unwrap();
        let results = run(urls.clone(), &fetcher, None).await;

        assert_eq!(results.total(), urls.len());
        assert_eq!(results.extracted.len(), 2);
        assert_eq!(results.rejected.len(), 1);

        // No URL shows up on both sides
        for rejected in &results.rejected {
            assert!(results.extracted.iter().all(|e| e.url != rejected.url));
        }
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let server = MockServer::start().await;
        mock_page(&server, "/ok", 200, "<html><body>jane@ok.example</body></html>").await;
        mock_page(&server, "/gone", 404, "").await;

        let urls = vec![
            format!("{}/ok", server.uri()),
            format!("{}/gone", server.uri()),
        ];
        let fetcher = Fetcher::new().unwrap();
        let results = run(urls, &fetcher, None).await;

        assert_eq!(results.extracted.len(), 1);
        assert_eq!(results.extracted[0].emails, vec!["jane@ok.example"]);

        assert_eq!(results.rejected.len(), 1);
        assert_eq!(results.rejected[0].reason, "HTTP 404");
    }

    #[tokio::test]
    async fn test_empty_email_page_keeps_its_row() {
        let server = MockServer::start().await;
        mock_page(&server, "/empty", 200, "<p>no addresses</p>").await;

        let fetcher = Fetcher::new().unwrap();
        let results = run(vec![format!("{}/empty", server.uri())], &fetcher, None).await;

        assert_eq!(results.extracted.len(), 1);
        assert!(results.extracted[0].emails.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_urls_fetched_independently() {
        let server = MockServer::start().await;
        mock_page(&server, "/ok", 200, "<p>dup@ok.example</p>").await;

        let url = format!("{}/ok", server.uri());
        let fetcher = Fetcher::new().unwrap();
        let results = run(vec![url.clone(), url], &fetcher, None).await;

        assert_eq!(results.extracted.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_is_valid() {
        let fetcher = Fetcher::new().unwrap();
        let results = run(Vec::new(), &fetcher, None).await;
        assert_eq!(results.total(), 0);
    }

    #[tokio::test]
    async fn test_bounded_and_unbounded_classify_identically() {
        let server = MockServer::start().await;
        for i in 0..6 {
            mock_page(&server, &format!("/ok{}", i), 200, "<p>a@b.example</p>").await;
            mock_page(&server, &format!("/bad{}", i), 500, "").await;
        }

        let mut urls = Vec::new();
        for i in 0..6 {
            urls.push(format!("{}/ok{}", server.uri(), i));
            urls.push(format!("{}/bad{}", server.uri(), i));
        }

        let fetcher = Fetcher::new().unwrap();
        let bounded = run(urls.clone(), &fetcher, Some(2)).await;
        let unbounded = run(urls.clone(), &fetcher, None).await;

        assert_eq!(bounded.total(), urls.len());
        assert_eq!(unbounded.total(), urls.len());

        // Same per-URL classification either way; only ordering may differ
        let classify = |results: &crate::types::ResultSet| {
            let mut extracted: Vec<String> =
                results.extracted.iter().map(|r| r.url.clone()).collect();
            let mut rejected: Vec<(String, String)> = results
                .rejected
                .iter()
                .map(|r| (r.url.clone(), r.reason.clone()))
                .collect();
            extracted.sort();
            rejected.sort();
            (extracted, rejected)
        };
        assert_eq!(classify(&bounded), classify(&unbounded));
    }
}
