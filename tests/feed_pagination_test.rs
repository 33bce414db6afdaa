//! Feed fetch plus cursor navigation, end to end

use std::sync::Arc;

use serde_json::json;

use showcase_client::{Actions, Direction, GraphqlClient, MockTransport, PageCursors};
use showcase_config::ShowcaseConfig;

fn feed_page() -> serde_json::Value {
    json!({
        "projectSearch": {
            "pageInfo": {
                "hasNextPage": true,
                "hasPreviousPage": false,
                "startCursor": "c1",
                "endCursor": "c2"
            },
            "edges": [
                {
                    "node": {
                        "id": "p1",
                        "title": "Pixel Garden",
                        "description": "A tiny plant sim",
                        "image": "https://cdn.example.com/p1.png",
                        "liveSiteUrl": "https://pixelgarden.example.com",
                        "githubUrl": "https://github.com/ada/pixel-garden",
                        "category": "Frontend"
                    }
                },
                {
                    "node": {
                        "id": "p2",
                        "title": "Night Train",
                        "description": "A schedule explorer",
                        "image": "https://cdn.example.com/p2.png",
                        "liveSiteUrl": "https://nighttrain.example.com",
                        "githubUrl": "https://github.com/ada/night-train",
                        "category": "Frontend"
                    }
                }
            ]
        }
    })
}

#[tokio::test]
async fn feed_page_then_navigate_forward() {
    let mut graphql = GraphqlClient::new(&ShowcaseConfig::default()).unwrap();
    graphql.set_offline();
    graphql.add_mock("ListProjects", feed_page());

    let actions = Actions::with_parts(
        graphql.clone(),
        Arc::new(MockTransport::new()),
        "http://localhost:3000",
    );
    let page = actions.list_projects(Some("design"), None).await.unwrap();
    assert_eq!(page.len(), 2);

    // The fetch carried the api key and the normalised variables.
    let recorded = graphql.recorded_requests();
    assert_eq!(recorded[0].variables, json!({ "category": "design", "endcursor": null }));

    // Navigating forward from the page the user is on rewrites the query
    // string to carry the forward cursor only.
    let cursors = PageCursors::from(&page.page_info);
    let target = cursors.navigate("/", "category=design&startcursor=c1", Direction::Next);
    assert_eq!(target, "/?category=design&endcursor=c2");
}

#[tokio::test]
async fn first_page_cannot_navigate_backward() {
    let mut graphql = GraphqlClient::new(&ShowcaseConfig::default()).unwrap();
    graphql.set_offline();
    graphql.add_mock("ListProjects", feed_page());

    let actions = Actions::with_parts(
        graphql,
        Arc::new(MockTransport::new()),
        "http://localhost:3000",
    );
    let page = actions.list_projects(None, None).await.unwrap();

    let cursors = PageCursors::from(&page.page_info);
    assert!(!cursors.can_navigate(Direction::Previous));
    assert_eq!(
        cursors.navigate_query("category=design", Direction::Previous),
        "category=design"
    );
}

#[tokio::test]
async fn absent_category_is_sent_as_empty_string() {
    let mut graphql = GraphqlClient::new(&ShowcaseConfig::default()).unwrap();
    graphql.set_offline();
    graphql.add_mock("ListProjects", feed_page());

    let actions = Actions::with_parts(
        graphql.clone(),
        Arc::new(MockTransport::new()),
        "http://localhost:3000",
    );
    actions.list_projects(None, Some("c2")).await.unwrap();

    let recorded = graphql.recorded_requests();
    assert_eq!(recorded[0].variables, json!({ "category": "", "endcursor": "c2" }));
}
