use super::*;

#[test]
fn default_query_matches_first_feed_page() {
    let query = PublicLessonsQuery::default();
    assert_eq!(query.to_query_string(), "page=1&limit=6&sort=newest");
}

#[test]
fn query_string_encodes_filters() {
    let query = PublicLessonsQuery {
        page: 3,
        search: "  letting go  ".to_owned(),
        category: "Personal Growth".to_owned(),
        emotional_tone: "Realization".to_owned(),
        sort: "most-liked".to_owned(),
        ..PublicLessonsQuery::default()
    };
    assert_eq!(
        query.to_query_string(),
        "page=3&limit=6&search=letting%20go&category=Personal%20Growth\
         &emotionalTone=Realization&sort=most-liked"
    );
}

#[test]
fn blank_filters_are_omitted() {
    let query = PublicLessonsQuery { search: "   ".to_owned(), ..PublicLessonsQuery::default() };
    assert!(!query.to_query_string().contains("search="));
}

#[test]
fn lesson_endpoint_formats_expected_path() {
    assert_eq!(lesson_endpoint("abc123"), "/lessons/abc123");
}

#[test]
fn lesson_input_serializes_camel_case_wire_fields() {
    let input = LessonInput {
        title: "On patience".to_owned(),
        description: "What waiting taught me.".to_owned(),
        category: "Mindset".to_owned(),
        emotional_tone: "Reflective".to_owned(),
        image_url: String::new(),
        visibility: Visibility::Public,
        access_level: AccessLevel::Premium,
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["emotionalTone"], "Reflective");
    assert_eq!(json["imageUrl"], "");
    assert_eq!(json["accessLevel"], "premium");
    assert_eq!(json["visibility"], "public");
}

#[test]
fn lesson_doc_unwraps_nested_lesson() {
    let doc: LessonDoc =
        serde_json::from_str(r#"{"lesson":{"_id":"l1","title":"On patience"}}"#).unwrap();
    assert_eq!(doc.lesson.id, "l1");
}
