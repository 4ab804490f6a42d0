use crate::common::{TestApp, routes};

#[tokio::test]
async fn scoreboard_lists_existing_members() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::group_scoreboard("squad")).await;
    assert_eq!(res.status, 200);
    assert!(res.text.contains("Training Squad"));
    for name in ["Joshua Lau", "Ray Li", "Ida Le"] {
        assert!(res.text.contains(name), "missing {name}");
    }
    assert!(!res.text.contains("ghost"));
    assert!(!res.text.contains("vanished"));
    assert!(res.text.contains("no attempt"));
    assert!(res.text.contains("href=\"/user/rayli/set/graph1\""));
}

#[tokio::test]
async fn missing_groups_render_not_found_text() {
    let app = TestApp::spawn().await;

    let cases = [
        (routes::group_scoreboard("nogroup"), "Group does not exist."),
        (routes::group_subs("nogroup"), "Group does not exist."),
        (
            routes::group_problem("squad", "nothing"),
            "Group or problem does not exist.",
        ),
        (
            routes::group_problem("nogroup", "aio11tickets"),
            "Group or problem does not exist.",
        ),
        (routes::group_set("squad", "noset"), "Group or set does not exist."),
    ];

    for (path, message) in cases {
        let res = app.get(&path).await;
        assert_eq!(res.status, 200, "{path}");
        assert_eq!(res.text, message, "{path}");
    }
}

#[tokio::test]
async fn group_subs_only_show_members() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::group_subs("squad")).await;
    assert_eq!(res.status, 200);
    assert!(res.text.contains("href=\"/problem/zipprob\""));

    let res = app.get(&routes::group_subs("nobody")).await;
    assert_eq!(res.status, 200);
    assert!(res.text.contains("No submissions."));
}

#[tokio::test]
async fn group_problem_need_not_be_in_group_sets() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::group_problem("squad", "zipprob")).await;
    assert_eq!(res.status, 200);
    assert!(res.text.contains("href=\"/user/junkbot/problem/zipprob/1\""));
}

#[tokio::test]
async fn group_set_filters_to_set_problems() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::group_set("squad", "graph1")).await;
    assert_eq!(res.status, 200);
    assert!(res.text.contains("href=\"/problem/aio11tickets\""));
    assert!(!res.text.contains("href=\"/problem/aiio13vitamin\""));
    assert!(!res.text.contains("href=\"/problem/zipprob\""));
}

#[tokio::test]
async fn scoreboard_marks_average_over_set_problems() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::api_scoreboard("squad")).await;
    assert_eq!(res.status, 200, "{}", res.text);

    let users: Vec<&str> = res.body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(users, vec!["junkbot", "rayli", "idle"]);

    let marks = res.body["marks"].as_array().unwrap();
    assert_eq!(marks.len(), 2, "unknown sets are skipped");

    let averages = |row: usize| -> Vec<Option<i64>> {
        marks[row]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["mark"].as_i64())
            .collect()
    };
    // graph1 = [aio11tickets, graphdfs]
    assert_eq!(averages(0), vec![Some(50), Some(0), None]);
    // aio = [aio11tickets, aiio13vitamin]
    assert_eq!(averages(1), vec![Some(50), Some(30), None]);

    let res = app.get(&routes::api_scoreboard("nogroup")).await;
    assert_eq!(res.status, 404);
    assert_eq!(res.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn scoreboard_rows_describe_their_set() {
    let app = TestApp::spawn().await;

    let res = app.get(&routes::api_scoreboard("squad")).await;
    let row = &res.body["marks"][1][0];
    assert_eq!(row["name"], "aio");
    assert_eq!(row["title"], "AIO Practice");
    assert_eq!(row["public"], true);
    assert_eq!(row["subs"].as_array().unwrap().len(), 2);
}
