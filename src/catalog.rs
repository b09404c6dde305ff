//! Static catalog
//!
//! Fixed candidate profiles, chat threads, cuisine and region tags. Everything
//! else in the application reads from here; nothing writes back.

use crate::model::types::{
    Candidate, CandidateId, ChatThread, Cuisine, CuisineId, Message, MessageId, Region, RegionId,
    Sender, ThreadId,
};

/// Cuisine tags in display order
pub static CUISINES: [Cuisine; 10] = [
    Cuisine { id: CuisineId(1), name: "Italian" },
    Cuisine { id: CuisineId(2), name: "Japanese" },
    Cuisine { id: CuisineId(3), name: "Mexican" },
    Cuisine { id: CuisineId(4), name: "French" },
    Cuisine { id: CuisineId(5), name: "Thai" },
    Cuisine { id: CuisineId(6), name: "Indian" },
    Cuisine { id: CuisineId(7), name: "Korean" },
    Cuisine { id: CuisineId(8), name: "Chinese" },
    Cuisine { id: CuisineId(9), name: "Russian" },
    Cuisine { id: CuisineId(10), name: "Georgian" },
];

/// Region tags in display order
pub static REGIONS: [Region; 6] = [
    Region { id: RegionId(1), name: "Europe" },
    Region { id: RegionId(2), name: "Asia" },
    Region { id: RegionId(3), name: "North America" },
    Region { id: RegionId(4), name: "South America" },
    Region { id: RegionId(5), name: "Africa" },
    Region { id: RegionId(6), name: "Oceania" },
];

const PHOTO_BASE: &str = "https://images.unsplash.com";

fn photo(key: &str) -> String {
    format!("{}/{}", PHOTO_BASE, key)
}

/// Look up a cuisine by id
pub fn cuisine(id: CuisineId) -> Option<&'static Cuisine> {
    CUISINES.iter().find(|c| c.id == id)
}

/// Look up a region by id
pub fn region(id: RegionId) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.id == id)
}

pub fn cuisine_ids() -> Vec<CuisineId> {
    CUISINES.iter().map(|c| c.id).collect()
}

pub fn region_ids() -> Vec<RegionId> {
    REGIONS.iter().map(|r| r.id).collect()
}

/// Candidates shown in the discovery feed
pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: CandidateId(1),
            name: "Anna".to_string(),
            age: 28,
            photos: vec![
                photo("photo-1565299624946-b28f40a0ae38"),
                photo("photo-1565958011703-44f9829ba187"),
                photo("photo-1482049016688-2d3e1b311543"),
            ],
            cuisines: vec![CuisineId(1), CuisineId(2), CuisineId(3)],
            description: "Love cooking ramen and experimenting with sauces".to_string(),
        },
        Candidate {
            id: CandidateId(2),
            name: "Mikhail".to_string(),
            age: 32,
            photos: vec![
                photo("photo-1540189549336-e6e99c3679fe"),
                photo("photo-1563379926898-05f4575a45d8"),
                photo("photo-1484723091739-30a097e8f929"),
            ],
            cuisines: vec![CuisineId(4), CuisineId(5), CuisineId(6)],
            description: "Chef with 10 years behind the stove, looking for kindred spirits"
                .to_string(),
        },
    ]
}

fn message(id: u64, text: &str, sender: Sender, timestamp: &str, image: Option<&str>) -> Message {
    Message {
        id: MessageId(id),
        text: text.to_string(),
        sender,
        timestamp: timestamp.to_string(),
        image: image.map(photo),
    }
}

/// Chat threads the session starts with
pub fn chat_threads() -> Vec<ChatThread> {
    vec![
        ChatThread {
            id: ThreadId(1),
            name: "Anna".to_string(),
            avatar: photo("photo-1565299624946-b28f40a0ae38"),
            last_message: "Hi! How about some Italian food?".to_string(),
            unread: 2,
            messages: vec![
                message(1, "Hi! How about some Italian food?", Sender::Other, "14:30", None),
                message(
                    2,
                    "Sounds great! I'm making carbonara right now",
                    Sender::Me,
                    "14:32",
                    None,
                ),
                message(
                    3,
                    "Here's my recipe!",
                    Sender::Other,
                    "14:33",
                    Some("photo-1563379926898-05f4575a45d8"),
                ),
            ],
        },
        ChatThread {
            id: ThreadId(2),
            name: "Mikhail".to_string(),
            avatar: photo("photo-1540189549336-e6e99c3679fe"),
            last_message: "I made a new ramen recipe!".to_string(),
            unread: 0,
            messages: vec![
                message(1, "Hi! I made a new ramen recipe!", Sender::Other, "15:30", None),
                message(2, "Oh, interesting! Will you share it?", Sender::Me, "15:32", None),
                message(
                    3,
                    "Of course! Here's a photo of the finished dish",
                    Sender::Other,
                    "15:33",
                    Some("photo-1563379926898-05f4575a45d8"),
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_candidate_ids_unique() {
        let candidates = candidates();
        let ids: HashSet<_> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), candidates.len());
    }

    #[test]
    fn test_thread_ids_unique() {
        let threads = chat_threads();
        let ids: HashSet<_> = threads.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), threads.len());
    }

    #[test]
    fn test_tag_ids_unique() {
        let cuisine_ids: HashSet<_> = CUISINES.iter().map(|c| c.id).collect();
        assert_eq!(cuisine_ids.len(), CUISINES.len());
        let region_ids: HashSet<_> = REGIONS.iter().map(|r| r.id).collect();
        assert_eq!(region_ids.len(), REGIONS.len());
    }

    #[test]
    fn test_candidate_cuisines_resolve() {
        for candidate in candidates() {
            for id in &candidate.cuisines {
                assert!(cuisine(*id).is_some(), "unknown cuisine {:?} on {}", id, candidate.name);
            }
        }
    }

    #[test]
    fn test_seed_thread_shape() {
        let threads = chat_threads();
        assert_eq!(threads[0].unread, 2);
        assert_eq!(threads[0].messages.len(), 3);
        assert!(threads[0].messages[2].image.is_some());
        assert_eq!(region(RegionId(2)).map(|r| r.name), Some("Asia"));
    }
}
