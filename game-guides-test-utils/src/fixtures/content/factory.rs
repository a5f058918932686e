//! Query result documents in the shape the content store returns them.
//!
//! Values are plain JSON so they can be served by mock endpoints without depending on the
//! application's view models.

use serde_json::{json, Value};

/// Image reference to a 1920x1080 JPEG asset.
pub fn image(hash: &str) -> Value {
    json!({
        "_type": "image",
        "asset": { "_ref": format!("image-{}-1920x1080-jpg", hash), "_type": "reference" }
    })
}

pub fn slug(current: &str) -> Value {
    json!({ "_type": "slug", "current": current })
}

/// Entry of the `listGames` result.
pub fn game_summary(id: &str, name: &str, slug_value: &str, mission_count: u32) -> Value {
    json!({
        "_id": id,
        "name": name,
        "slug": slug(slug_value),
        "description": format!("{} guides and walkthroughs", name),
        "coverImage": image(id),
        "developer": "IO Interactive",
        "publisher": "IO Interactive",
        "releaseDate": "2021-01-20",
        "genres": ["Stealth", "Action"],
        "platforms": ["PC", "PlayStation 5"],
        "featured": true,
        "missionCount": mission_count
    })
}

/// `listGames` result with two published games.
pub fn game_summaries() -> Value {
    json!([
        game_summary("game-blood-money", "Blood Money", "blood-money", 12),
        game_summary("game-hitman-3", "Hitman 3", "hitman-3", 6),
    ])
}

/// `getGameBySlug` result with one mission and one guide.
pub fn game_detail(slug_value: &str) -> Value {
    json!({
        "_id": "game-hitman-3",
        "name": "Hitman 3",
        "slug": slug(slug_value),
        "description": "The dramatic conclusion to the World of Assassination trilogy.",
        "coverImage": image("hitman3cover"),
        "developer": "IO Interactive",
        "publisher": "IO Interactive",
        "releaseDate": "2021-01-20",
        "genres": ["Stealth"],
        "platforms": ["PC"],
        "missions": [
            {
                "_id": "mission-dubai",
                "name": "On Top of the World",
                "slug": slug("on-top-of-the-world"),
                "location": "Dubai, UAE",
                "difficulty": "Professional",
                "description": "Infiltrate the Burj Al-Ghazali.",
                "missionImage": null
            }
        ],
        "guides": [
            {
                "_id": "guide-sa-dubai",
                "title": "Silent Assassin Dubai",
                "slug": slug("silent-assassin-dubai"),
                "description": null,
                "coverImage": null,
                "difficulty": "advanced",
                "estimatedTime": "45 minutes",
                "publishedAt": "2024-03-10T12:00:00Z",
                "author": { "name": "Agent Diana", "avatar": null }
            }
        ]
    })
}

/// `getMissionBySlug` result with expanded targets and unset reference lists.
pub fn mission_detail(slug_value: &str) -> Value {
    json!({
        "_id": "mission-paris",
        "name": "The Showstopper",
        "slug": slug(slug_value),
        "location": "Paris, France",
        "difficulty": "Novice",
        "description": "Eliminate Viktor Novikov and Dalia Margolis at the fashion show.",
        "missionImage": image("paris"),
        "locationMap": null,
        "game": { "name": "Hitman 3", "slug": slug("hitman-3") },
        "targets": [
            {
                "_id": "viktor_novikov",
                "name": "Viktor Novikov",
                "slug": slug("viktor-novikov"),
                "description": "Fashion mogul and IAGO leader",
                "image": null,
                "locations": ["Fashion Show", "Attic"],
                "routines": [
                    {
                        "timeStart": 0,
                        "location": "Fashion Show",
                        "action": "Watching the show",
                        "duration": 300,
                        "securityLevel": "High"
                    }
                ],
                "vulnerabilities": ["Chandelier accident"]
            }
        ],
        "disguises": null,
        "weapons": null,
        "opportunities": [],
        "challenges": null,
        "masteryUnlocks": [
            {
                "_id": "paris_mastery_2",
                "level": 2,
                "unlock": "Palace Staff Starting Location",
                "type": "Starting Location"
            }
        ],
        "startingLocations": null,
        "tips": null,
        "walkthrough": [
            {
                "_type": "block",
                "_key": "a1",
                "style": "normal",
                "children": [{ "_type": "span", "_key": "s1", "text": "Start at the Palace Garden.", "marks": [] }],
                "markDefs": []
            }
        ]
    })
}

/// Entry of the `listGuides` result.
pub fn guide_list_item(id: &str, title: &str, slug_value: &str, published_at: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "slug": slug(slug_value),
        "description": null,
        "coverImage": null,
        "difficulty": "beginner",
        "estimatedTime": "20 minutes",
        "publishedAt": published_at,
        "tags": ["stealth"],
        "featured": false,
        "game": { "name": "Hitman 3", "slug": slug("hitman-3"), "coverImage": null },
        "author": { "name": "Agent Diana", "slug": slug("agent-diana"), "avatar": null }
    })
}

/// `getGuideBySlug` result with author profile and no mission.
pub fn guide_detail(slug_value: &str) -> Value {
    json!({
        "_id": "guide-beginner",
        "title": "Beginner Tips",
        "slug": slug(slug_value),
        "description": "Everything a new agent should know.",
        "coverImage": null,
        "content": [
            {
                "_type": "block",
                "_key": "b1",
                "style": "h2",
                "children": [{ "_type": "span", "_key": "s1", "text": "Blend in", "marks": [] }],
                "markDefs": []
            },
            { "_type": "videoEmbed", "url": "https://www.youtube.com/watch?v=abc", "title": "Blending in" }
        ],
        "difficulty": "beginner",
        "estimatedTime": "20 minutes",
        "publishedAt": "2024-03-05T12:00:00Z",
        "updatedAt": null,
        "tags": null,
        "game": { "name": "Hitman 3", "slug": slug("hitman-3"), "coverImage": null },
        "mission": null,
        "author": {
            "name": "Agent Diana",
            "slug": slug("agent-diana"),
            "avatar": null,
            "bio": "Silent Assassin only.",
            "socialLinks": { "twitch": "https://twitch.tv/agentdiana" }
        }
    })
}

/// `getFeaturedContent` result with one entry in each slice.
pub fn featured_content() -> Value {
    json!({
        "featuredGames": [
            {
                "_id": "game-hitman-3",
                "name": "Hitman 3",
                "slug": slug("hitman-3"),
                "description": null,
                "coverImage": image("hitman3cover"),
                "developer": "IO Interactive",
                "missionCount": 6
            }
        ],
        "featuredGuides": [
            {
                "_id": "guide-sa-dubai",
                "title": "Silent Assassin Dubai",
                "slug": slug("silent-assassin-dubai"),
                "description": null,
                "coverImage": null,
                "difficulty": "advanced",
                "estimatedTime": "45 minutes",
                "publishedAt": "2024-03-10T12:00:00Z",
                "game": { "name": "Hitman 3", "slug": slug("hitman-3") },
                "author": { "name": "Agent Diana", "avatar": null }
            }
        ],
        "recentGuides": [
            {
                "_id": "guide-beginner",
                "title": "Beginner Tips",
                "slug": slug("beginner-tips"),
                "description": null,
                "coverImage": null,
                "publishedAt": "2024-03-05T12:00:00Z",
                "game": { "name": "Hitman 3", "slug": slug("hitman-3") }
            }
        ]
    })
}
