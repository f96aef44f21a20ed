use std::{sync::Arc, time::Duration};

use founderscan_core::{
    render_report, Category, DefaultScanner, FetchError, HttpFetcher, Impact, RenderOptions,
    ScanSettings, Scanner, Target,
};
use httpmock::prelude::*;

const LANDING_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Acme Rockets | Reusable launch vehicles for startups</title>
  <meta name="description" content="Acme builds reusable rockets so small teams can reach orbit on a startup budget, every week.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta property="og:title" content="Acme Rockets">
  <link rel="canonical" href="https://acme.example/">
  <script type="application/ld+json">{"@type": "Organization"}</script>
  <script src="http://cdn.example.com/analytics.js"></script>
</head>
<body>
  <h1>Reach orbit <em>weekly</em></h1>
  <img src="/hero.png" alt="Rocket on the pad">
  <img src="/team.png">
  <footer>
    <a href="/privacy">Privacy policy</a>
    <a href="/terms">Terms of service</a>
    <p>We use cookies.</p>
    <a href="mailto:hello@acme.example">Contact</a>
  </footer>
</body>
</html>"#;

fn quick_settings() -> ScanSettings {
    ScanSettings {
        timeout_secs: 5,
        probe_timeout_secs: 1,
        ..ScanSettings::default()
    }
}

fn scanner() -> DefaultScanner<HttpFetcher> {
    DefaultScanner::new(Arc::new(HttpFetcher::new(&quick_settings()).unwrap()))
}

#[tokio::test]
async fn scans_local_site_end_to_end() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .header("Strict-Transport-Security", "max-age=63072000")
                .header("content-security-policy", "default-src 'self'")
                .header("X-Content-Type-Options", "nosniff")
                .body(LANDING_PAGE);
        })
        .await;
    let robots = server
        .mock_async(|when, then| {
            when.method(GET).path("/robots.txt");
            then.status(200).body("User-agent: *\nAllow: /\n");
        })
        .await;

    let target = Target::with_base_url("acme.example", server.base_url());
    let report = scanner().scan(&target).await.unwrap();

    page.assert_async().await;
    robots.assert_async().await;

    let get = |name: &str| report.checks.get(name).unwrap_or_else(|| panic!("{name} missing"));

    for name in ["HSTS", "CSP", "X-Content-Type-Options"] {
        assert!(get(name).passed, "{name} header is served");
    }
    for name in ["X-Frame-Options", "Referrer-Policy", "Permissions-Policy"] {
        assert!(!get(name).passed, "{name} header is absent");
    }
    // Local server speaks plain http.
    assert!(!get("HTTPS/SSL").passed);
    assert!(get("No mixed content").passed);

    for name in [
        "Title tag",
        "Meta description",
        "H1 tag",
        "Canonical tag",
        "Schema markup",
        "Open Graph tags",
        "robots.txt",
    ] {
        assert!(get(name).passed, "{name} should pass");
    }
    assert!(!get("sitemap.xml").passed);
    assert_eq!(get("H1 tag").detail.as_deref(), Some("Reach orbit weekly"));

    let alt = get("Image alt text");
    assert!(!alt.passed);
    assert_eq!(alt.detail.as_deref(), Some("1/2 missing alt"));
    assert!(get("Mobile viewport").passed);

    for name in ["Privacy policy", "Cookie notice", "Terms of service", "Contact info"] {
        assert!(get(name).passed, "{name} should pass");
    }

    assert_eq!(report.total(), 25);
    assert_eq!(report.domain, "acme.example");
    let security = report
        .category_scores
        .iter()
        .find(|c| c.category == Category::Security)
        .unwrap();
    assert_eq!((security.passed, security.total), (4, 8));

    let rendered = render_report(&report, &RenderOptions::default()).unwrap();
    assert!(rendered.contains("Site: acme.example"));
    assert!(rendered.contains(&format!("OVERALL SCORE: {}/100", report.score)));
    let critical_https = format!("{} HTTPS/SSL", Impact::Critical.icon());
    assert!(rendered.contains(&critical_https));
}

#[tokio::test]
async fn landing_page_report_json() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Strict-Transport-Security", "max-age=63072000")
                .header("content-security-policy", "default-src 'self'")
                .header("X-Content-Type-Options", "nosniff")
                .body(LANDING_PAGE);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/robots.txt");
            then.status(200).body("User-agent: *\n");
        })
        .await;

    let target = Target::with_base_url("acme.example", server.base_url());
    let report = scanner().scan(&target).await.unwrap();

    insta::assert_json_snapshot!(report, {
        ".load_time" => "[load_time]",
        ".checks[\"Load time (<2s)\"].detail" => "[load_time]",
        ".checks[\"Load time (<3s)\"].detail" => "[load_time]",
    }, @r#"
{
  "domain": "acme.example",
  "load_time": "[load_time]",
  "checks": {
    "CSP": {
      "name": "CSP",
      "passed": true,
      "impact": "high",
      "category": "security",
      "detail": null
    },
    "Canonical tag": {
      "name": "Canonical tag",
      "passed": true,
      "impact": "high",
      "category": "seo",
      "detail": null
    },
    "Contact info": {
      "name": "Contact info",
      "passed": true,
      "impact": "low",
      "category": "compliance",
      "detail": null
    },
    "Cookie notice": {
      "name": "Cookie notice",
      "passed": true,
      "impact": "medium",
      "category": "compliance",
      "detail": null
    },
    "H1 tag": {
      "name": "H1 tag",
      "passed": true,
      "impact": "critical",
      "category": "seo",
      "detail": "Reach orbit weekly"
    },
    "HSTS": {
      "name": "HSTS",
      "passed": true,
      "impact": "high",
      "category": "security",
      "detail": null
    },
    "HTML not bloated": {
      "name": "HTML not bloated",
      "passed": true,
      "impact": "low",
      "category": "performance",
      "detail": null
    },
    "HTTPS/SSL": {
      "name": "HTTPS/SSL",
      "passed": false,
      "impact": "critical",
      "category": "security",
      "detail": null
    },
    "Image alt text": {
      "name": "Image alt text",
      "passed": false,
      "impact": "medium",
      "category": "performance",
      "detail": "1/2 missing alt"
    },
    "Load time (<2s)": {
      "name": "Load time (<2s)",
      "passed": true,
      "impact": "high",
      "category": "performance",
      "detail": "[load_time]"
    },
    "Load time (<3s)": {
      "name": "Load time (<3s)",
      "passed": true,
      "impact": "critical",
      "category": "performance",
      "detail": "[load_time]"
    },
    "Meta description": {
      "name": "Meta description",
      "passed": true,
      "impact": "high",
      "category": "seo",
      "detail": "92 chars ✓"
    },
    "Mobile viewport": {
      "name": "Mobile viewport",
      "passed": true,
      "impact": "high",
      "category": "performance",
      "detail": null
    },
    "No mixed content": {
      "name": "No mixed content",
      "passed": true,
      "impact": "high",
      "category": "security",
      "detail": null
    },
    "Open Graph tags": {
      "name": "Open Graph tags",
      "passed": true,
      "impact": "medium",
      "category": "seo",
      "detail": null
    },
    "Permissions-Policy": {
      "name": "Permissions-Policy",
      "passed": false,
      "impact": "low",
      "category": "security",
      "detail": null
    },
    "Privacy policy": {
      "name": "Privacy policy",
      "passed": true,
      "impact": "high",
      "category": "compliance",
      "detail": null
    },
    "Referrer-Policy": {
      "name": "Referrer-Policy",
      "passed": false,
      "impact": "low",
      "category": "security",
      "detail": null
    },
    "Schema markup": {
      "name": "Schema markup",
      "passed": true,
      "impact": "high",
      "category": "seo",
      "detail": null
    },
    "Terms of service": {
      "name": "Terms of service",
      "passed": true,
      "impact": "medium",
      "category": "compliance",
      "detail": null
    },
    "Title tag": {
      "name": "Title tag",
      "passed": true,
      "impact": "critical",
      "category": "seo",
      "detail": "Acme Rockets | Reusable launch vehicles for startu"
    },
    "X-Content-Type-Options": {
      "name": "X-Content-Type-Options",
      "passed": true,
      "impact": "medium",
      "category": "security",
      "detail": null
    },
    "X-Frame-Options": {
      "name": "X-Frame-Options",
      "passed": false,
      "impact": "medium",
      "category": "security",
      "detail": null
    },
    "robots.txt": {
      "name": "robots.txt",
      "passed": true,
      "impact": "medium",
      "category": "seo",
      "detail": null
    },
    "sitemap.xml": {
      "name": "sitemap.xml",
      "passed": false,
      "impact": "high",
      "category": "seo",
      "detail": null
    }
  },
  "score": 76,
  "verdict": "good",
  "category_scores": [
    {
      "category": "security",
      "passed": 4,
      "total": 8,
      "score": 50
    },
    {
      "category": "seo",
      "passed": 7,
      "total": 8,
      "score": 88
    },
    {
      "category": "performance",
      "passed": 4,
      "total": 5,
      "score": 80
    },
    {
      "category": "compliance",
      "passed": 4,
      "total": 4,
      "score": 100
    }
  ]
}
"#);
}

#[tokio::test]
async fn probe_timeout_fails_check_without_aborting() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<title>A</title>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sitemap.xml");
            then.status(200).delay(Duration::from_secs(3));
        })
        .await;

    let target = Target::with_base_url("slow.example", server.base_url());
    let report = scanner().scan(&target).await.unwrap();
    let sitemap = report.checks.get("sitemap.xml").unwrap();
    assert!(!sitemap.passed);
    assert!(sitemap.detail.is_none());
}

#[tokio::test]
async fn unreachable_site_aborts_scan() {
    let target = Target::with_base_url("nowhere.example", "http://127.0.0.1:1");
    let err = scanner().scan(&target).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FetchError>(),
        Some(FetchError::Connect { .. })
    ));
}
