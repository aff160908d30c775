//! Service payloads shared by the integration tests

use serde_json::{Value, json};

/// A Discovery configuration as returned by `GET /v1/environments/{id}/configurations/{id}`
pub fn configuration() -> Value {
    json!({
        "configuration_id": "448e3545-51ca-4530-a03b-6ff282ceac2e",
        "name": "IBM News",
        "created": "2015-08-24T18:42:25.324Z",
        "updated": "2015-08-24T18:42:25.324Z",
        "description": "A configuration useful for ingesting IBM press releases.",
        "conversions": {
            "pdf": {
                "heading": {
                    "fonts": [
                        { "level": 1, "min_size": 24, "max_size": 80 },
                        { "level": 2, "min_size": 18, "max_size": 24, "bold": false, "italic": false },
                        { "level": 2, "min_size": 18, "max_size": 24, "bold": true },
                        { "level": 3, "min_size": 13, "max_size": 18, "bold": false, "italic": false }
                    ]
                }
            },
            "word": {
                "heading": {
                    "fonts": [
                        { "level": 1, "min_size": 24, "bold": false, "italic": false },
                        { "level": 2, "min_size": 18, "max_size": 23, "bold": true, "italic": false }
                    ],
                    "styles": [
                        { "level": 1, "names": ["pullout heading", "pulloutheading", "header"] },
                        { "level": 2, "names": ["subtitle"] }
                    ]
                }
            },
            "html": {
                "exclude_tags_completely": ["script", "sup"],
                "exclude_tags_keep_content": ["font", "em", "span"],
                "exclude_content": { "xpaths": [] },
                "keep_content": { "xpaths": [] },
                "exclude_tag_attributes": ["EVENT_ACTIONS"]
            },
            "segment": { "enabled": true, "selector_tags": ["h1", "h2"] },
            "json_normalizations": []
        },
        "enrichments": [
            {
                "description": "Enrich the text with keywords, entities, and concepts",
                "destination_field": "enriched_text",
                "source_field": "text",
                "overwrite": false,
                "enrichment": "alchemy_language",
                "ignore_downstream_errors": false,
                "options": {
                    "extract": ["keyword", "entity", "doc-sentiment", "taxonomy", "concept", "relation"],
                    "sentiment": true,
                    "quotations": true
                }
            }
        ],
        "normalizations": [
            { "operation": "move", "source_field": "extracted_metadata.title", "destination_field": "metadata.title" },
            { "operation": "remove", "source_field": "extracted_metadata" },
            { "operation": "remove_nulls" }
        ]
    })
}

/// The Text to Speech voice list
pub fn voices() -> Value {
    json!({
        "voices": [
            {
                "url": "https://stream.watsonplatform.net/text-to-speech/api/v1/voices/en-US_AllisonVoice",
                "gender": "female",
                "name": "en-US_AllisonVoice",
                "language": "en-US",
                "description": "Allison: American English female voice.",
                "customizable": true,
                "supported_features": { "custom_pronunciation": true, "voice_transformation": true }
            },
            {
                "url": "https://stream.watsonplatform.net/text-to-speech/api/v1/voices/de-DE_DieterVoice",
                "gender": "male",
                "name": "de-DE_DieterVoice",
                "language": "de-DE",
                "description": "Dieter: Standard German (Standarddeutsch) male voice.",
                "customizable": true,
                "supported_features": { "custom_pronunciation": true, "voice_transformation": false }
            }
        ]
    })
}

/// The Visual Recognition custom classifier list
pub fn classifiers() -> Value {
    json!({
        "classifiers": [
            {
                "classifier_id": "dogs_1941945966",
                "name": "dogs",
                "owner": "a3a48ea7-492b-448b-87d7-9dade8bde5a9",
                "status": "ready",
                "created": "2016-05-20T18:46:48.281Z",
                "classes": [{ "class": "goldenretriever" }, { "class": "husky" }]
            },
            {
                "classifier_id": "cars_1136893621",
                "name": "cars",
                "status": "failed",
                "explanation": "Insufficient training data"
            }
        ]
    })
}
