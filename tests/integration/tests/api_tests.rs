//! End-to-end tests
//!
//! Each test spawns the real router on an ephemeral port with its own
//! temporary SQLite database.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, header, session_cookie, set_cookie_header,
    TestServer, TEST_ADMIN_PASS, TEST_ADMIN_USER,
};
use reqwest::StatusCode;

/// Create a category and return its id
async fn create_category(server: &TestServer, session: &str, name: &str) -> i64 {
    let response = server
        .post_form("/admin/categories", session, &category_form(name))
        .await
        .unwrap();
    let created: Mutation = assert_json(response, StatusCode::OK).await.unwrap();
    created.id
}

async fn create_skill(server: &TestServer, session: &str, name: &str, category_id: i64) -> i64 {
    let response = server
        .post_form("/admin/skills", session, &skill_form(name, category_id, 70))
        .await
        .unwrap();
    let created: Mutation = assert_json(response, StatusCode::OK).await.unwrap();
    created.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert!(header(&response, "x-request-id").is_some());
}

// ============================================================================
// Public Page Tests
// ============================================================================

#[tokio::test]
async fn test_about_page_fragment_flag() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/").await.unwrap();
    assert_eq!(header(&response, "vary").as_deref(), Some("HX-Request"));
    let page: PageBody<AboutView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!page.fragment);
    assert!(page.data.skills.is_empty());

    let response = server.get_htmx("/").await.unwrap();
    let page: PageBody<AboutView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.fragment);
}

#[tokio::test]
async fn test_seeded_content() {
    let server = TestServer::start_seeded().await.unwrap();

    let response = server.get("/").await.unwrap();
    let page: PageBody<AboutView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.skills.len(), 12);
    assert_eq!(page.data.experiences.len(), 2);

    let response = server.get("/projects").await.unwrap();
    let page: PageBody<Vec<ProjectCardView>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert!(page.data.iter().all(|card| !card.skills.is_empty()));

    let response = server.get("/blog/getting-started-goth-stack").await.unwrap();
    let page: PageBody<BlogPostView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.published);
}

#[tokio::test]
async fn test_skill_filter_and_detail() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let languages = create_category(&server, &session, "Programming languages").await;
    let databases = create_category(&server, &session, "Databases").await;
    let rust = create_skill(&server, &session, "Rust", languages).await;
    create_skill(&server, &session, "SQLite", databases).await;

    let response = server.get("/api/skills?category_id=all").await.unwrap();
    let page: PageBody<Vec<SkillView>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);

    let response = server
        .get(&format!("/api/skills?category_id={databases}"))
        .await
        .unwrap();
    let page: PageBody<Vec<SkillView>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].category, "Databases");

    // No project uses the skill yet
    let response = server.get(&format!("/api/skills/{rust}")).await.unwrap();
    let page: PageBody<SkillDetailView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.skill.name, "Rust");
    assert!(page.data.project.is_none());

    let response = server.get("/api/skills/9999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/api/skills/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Login / Logout Tests
// ============================================================================

#[tokio::test]
async fn test_login_with_wrong_password() {
    let server = TestServer::start().await.unwrap();

    let response = server.login(TEST_ADMIN_USER, "wrong").await.unwrap();
    assert!(session_cookie(&response).is_none());
    assert!(header(&response, "hx-redirect").is_none());
    let page: PageBody<LoginView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.error.as_deref(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let server = TestServer::start().await.unwrap();

    let response = server.login(TEST_ADMIN_USER, TEST_ADMIN_PASS).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "hx-redirect").as_deref(), Some("/admin"));

    let cookie = set_cookie_header(&response).expect("session cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Secure"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/admin"));
    assert!(cookie.contains("Max-Age=604800"));

    let token = session_cookie(&response).unwrap();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn test_login_page_is_public() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/admin/login").await.unwrap();
    let page: PageBody<LoginView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.error.is_none());
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server.get_admin("/admin", &session).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.logout(&session).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location").as_deref(), Some("/admin/login"));
    let cookie = set_cookie_header(&response).expect("removal cookie");
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/admin"));

    let response = server.get_admin("/admin", &session).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_logout_without_session_still_redirects() {
    let server = TestServer::start().await.unwrap();
    let response = server.logout("garbage").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_is_rate_limited_after_burst() {
    let server = TestServer::start_with(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .await
    .unwrap();

    for _ in 0..2 {
        let response = server.login(TEST_ADMIN_USER, "wrong").await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = server.login(TEST_ADMIN_USER, TEST_ADMIN_PASS).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(session_cookie(&response).is_none());

    // Only the form submission is limited
    let response = server.get("/admin/login").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unusable_rate_limit_leaves_login_open() {
    let server = TestServer::start_with(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "0"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .await
    .unwrap();

    for _ in 0..5 {
        let response = server.login(TEST_ADMIN_USER, "wrong").await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    server.admin_session().await.unwrap();
}

// ============================================================================
// Gate Tests
// ============================================================================

#[tokio::test]
async fn test_gate_redirects_plain_requests() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/admin").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(header(&response, "location").as_deref(), Some("/admin/login"));

    // Well-formed but unknown token
    let response = server.get_admin("/admin/skills", &"ab".repeat(32)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_gate_answers_htmx_with_401() {
    let server = TestServer::start().await.unwrap();

    let response = server.get_htmx("/admin/projects").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        header(&response, "hx-redirect").as_deref(),
        Some("/admin/login")
    );
}

#[tokio::test]
async fn test_gate_blocks_mutations() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/admin/categories", "not-a-token", &category_form("Blocked"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Nothing was written
    let session = server.admin_session().await.unwrap();
    let response = server.get_admin("/admin", &session).await.unwrap();
    let page: PageBody<DashboardView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.categories, 0);
}

// ============================================================================
// Admin CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_category_mutations_trigger_skill_refresh() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server
        .post_form("/admin/categories", &session, &category_form("Backend"))
        .await
        .unwrap();
    assert_eq!(header(&response, "hx-trigger").as_deref(), Some("refreshSkills"));
    let created: Mutation = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .put_form(
            &format!("/admin/categories/{}", created.id),
            &session,
            &category_form("Back end"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_admin(&format!("/admin/categories/{}", created.id), &session)
        .await
        .unwrap();
    assert_eq!(header(&response, "hx-trigger").as_deref(), Some("refreshSkills"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_category_is_conflict() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let name = format!("Category {}", unique_suffix());
    create_category(&server, &session, &name).await;

    let response = server
        .post_form("/admin/categories", &session, &category_form(&name))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_CATEGORY");
}

#[tokio::test]
async fn test_category_list() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let id = create_category(&server, &session, "  Databases  ").await;

    let response = server.get_admin("/admin/categories", &session).await.unwrap();
    let page: PageBody<Vec<CategoryView>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, id);
    assert_eq!(page.data[0].name, "Databases");

    let response = server.get("/admin/categories").await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_blank_required_fields_are_rejected() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server
        .post_form("/admin/categories", &session, &category_form("   "))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server
        .post_form("/admin/projects", &session, &project_form(" \t ", &[]))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let mut blank_company = experience_form("Engineer", "");
    blank_company.retain(|(key, _)| *key != "company");
    blank_company.push(("company", "  ".to_string()));
    let response = server
        .post_form("/admin/experiences", &session, &blank_company)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get_admin("/admin", &session).await.unwrap();
    let page: PageBody<DashboardView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.categories, 0);
    assert_eq!(page.data.projects, 0);
}

#[tokio::test]
async fn test_skill_validation() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let category = create_category(&server, &session, "Software").await;

    let response = server
        .post_form("/admin/skills", &session, &skill_form("Rust", category, 150))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let response = server
        .post_form("/admin/skills", &session, &skill_form("Rust", 9999, 50))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.message, "Validation error: Unknown skill category");
}

#[tokio::test]
async fn test_deleted_skill_is_hidden() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let category = create_category(&server, &session, "Frontend").await;
    let skill = create_skill(&server, &session, "HTMX", category).await;

    let response = server
        .delete_admin(&format!("/admin/skills/{skill}"), &session)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/api/skills/{skill}")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Deleting again is not an error
    let response = server
        .delete_admin(&format!("/admin/skills/{skill}"), &session)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_project_skill_links() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let category = create_category(&server, &session, "Programming languages").await;
    let rust = create_skill(&server, &session, "Rust", category).await;
    let go = create_skill(&server, &session, "GoLang", category).await;

    let response = server
        .post_form("/admin/projects", &session, &project_form("Portfolio", &[rust, go]))
        .await
        .unwrap();
    assert_eq!(
        header(&response, "hx-trigger").as_deref(),
        Some("refreshProjects")
    );
    let created: Mutation = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/projects/{}/expand", created.id))
        .await
        .unwrap();
    let page: PageBody<ProjectCardView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.expanded);
    assert_eq!(page.data.long_desc, "A longer description");
    assert_eq!(page.data.skills.len(), 2);

    // Update replaces the links
    let response = server
        .put_form(
            &format!("/admin/projects/{}", created.id),
            &session,
            &project_form("Portfolio v2", &[go]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get(&format!("/api/projects/{}/collapse", created.id))
        .await
        .unwrap();
    let page: PageBody<ProjectCardView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!page.data.expanded);
    assert_eq!(page.data.title, "Portfolio v2");
    assert_eq!(page.data.skills.len(), 1);
    assert_eq!(page.data.skills[0].id, go);

    let response = server.get(&format!("/api/skills/{go}")).await.unwrap();
    let page: PageBody<SkillDetailView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.project.map(|p| p.id), Some(created.id));

    // Soft-deleted projects vanish from the public list
    server
        .delete_admin(&format!("/admin/projects/{}", created.id), &session)
        .await
        .unwrap();
    let response = server.get("/projects").await.unwrap();
    let page: PageBody<Vec<ProjectCardView>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_project_with_unknown_skill_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server
        .post_form("/admin/projects", &session, &project_form("Ghost", &[424_242]))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/projects").await.unwrap();
    let page: PageBody<Vec<ProjectCardView>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn test_blog_drafts_and_slugs() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server
        .post_form("/admin/blog", &session, &blog_form("Draft", "draft-post", false))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/blog/draft-post").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_form("/admin/blog", &session, &blog_form("Again", "draft-post", true))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_SLUG");

    let response = server
        .post_form("/admin/blog", &session, &blog_form("Bad slug", "Not A Slug", true))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_form("/admin/blog", &session, &blog_form("Hello", "hello-world", true))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/blog").await.unwrap();
    let page: PageBody<Vec<BlogPostView>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].slug, "hello-world");
    assert_eq!(page.data[0].tags, vec!["Rust", "SQLite"]);

    let response = server.get_admin("/admin/blog", &session).await.unwrap();
    let page: PageBody<Vec<BlogPostView>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_current_experience_shows_present() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server
        .post_form("/admin/experiences", &session, &experience_form("Engineer", ""))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_form("/admin/experiences", &session, &experience_form("Intern", "2023-13"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get("/").await.unwrap();
    let page: PageBody<AboutView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.experiences.len(), 1);
    assert_eq!(page.data.experiences[0].title, "Engineer");
    assert_eq!(page.data.experiences[0].end_label, "Present");
    assert!(page.data.experiences[0].current);
}

#[tokio::test]
async fn test_admin_forms() {
    let server = TestServer::start().await.unwrap();
    let session = server.admin_session().await.unwrap();
    let category = create_category(&server, &session, "Software").await;
    let skill = create_skill(&server, &session, "Git", category).await;

    let response = server.get_admin("/admin/skills/new", &session).await.unwrap();
    let page: PageBody<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data["item"].is_null());
    assert_eq!(page.data["categories"].as_array().map(Vec::len), Some(1));

    let response = server
        .get_admin(&format!("/admin/skills/{skill}/edit"), &session)
        .await
        .unwrap();
    let page: PageBody<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data["item"]["name"], "Git");

    let response = server
        .get_admin("/admin/education/9999/edit", &session)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_dashboard_counts() {
    let server = TestServer::start_seeded().await.unwrap();
    let session = server.admin_session().await.unwrap();

    let response = server.get_admin("/admin", &session).await.unwrap();
    let page: PageBody<DashboardView> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.categories, 5);
    assert_eq!(page.data.skills, 12);
    assert_eq!(page.data.projects, 2);
    assert_eq!(page.data.blog_posts, 1);
}
