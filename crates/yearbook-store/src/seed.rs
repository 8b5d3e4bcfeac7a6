//! First-run placeholder content.
//!
//! Each collection is generated only when its file is absent, so running
//! this against a populated store is a no-op.

use tracing::info;

use yearbook_types::models::{AccessCodes, Comment, Friend, MediaItem};

use crate::error::Result;
use crate::{Collection, Store};

pub const FRIEND_COUNT: i64 = 20;

const QUOTES: [&str; FRIEND_COUNT as usize] = [
    "The most amazing friend who always knows how to make everyone laugh. Best memories from our road trips together!",
    "My study partner through thick and thin. Couldn't have survived finals without you. Here's to many more late-night study sessions!",
    "Class clown and party starter! 🎉 You made every boring day fun. Never change your amazing energy!",
    "The most talented artist I know. Your creativity inspires everyone around you. Can't wait to see where life takes you!",
    "Future CEO in the making! Your determination and leadership skills are unmatched. Sky's the limit for you!",
    "Sports champion and team player! Your dedication on the field taught us all what true commitment means.",
    "Music genius! Every time you played, we all stopped to listen. Keep following your passion!",
    "The kindest soul with the biggest heart. You were always there when anyone needed help. Thank you for being you!",
    "Tech wizard who saved all our computers! Your coding skills are incredible. See you at Silicon Valley!",
    "Drama star! Your performances were absolutely breathtaking. Broadway is calling your name!",
    "Fashionista with impeccable style! You showed us how to express ourselves through fashion. Stay fabulous!",
    "Book lover and intellectual! Our deep conversations about life and literature will stay with me forever.",
    "Adventure seeker! From hiking trips to spontaneous road trips, you taught us to live life to the fullest!",
    "The photographer who captured all our best moments. Your eye for beauty is truly special.",
    "Future scientist! Your curiosity and analytical mind will change the world. We believe in you!",
    "The chef who made every potluck amazing! Your culinary skills are restaurant-worthy. Bon appétit!",
    "Gaming champion! Thanks for all the epic gaming sessions and teaching us strategy and teamwork.",
    "Environmental warrior! Your passion for saving the planet inspired us all to do better. Keep fighting!",
    "The poet with a way with words. Your beautiful writing touched our hearts. Never stop creating!",
    "Ultimate friend who brought us all together. You created a family out of strangers. Forever grateful! ❤️",
];

const VIDEO_URLS: [&str; 5] = [
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
];

/// Write placeholder content for every collection that has no file yet.
/// Returns the collections that were created.
pub fn ensure_seeded(store: &Store) -> Result<Vec<Collection>> {
    let mut created = Vec::new();

    for collection in Collection::ALL {
        if store.exists(collection)? {
            continue;
        }
        match collection {
            Collection::Friends => store.save(collection, &friends())?,
            Collection::Codes => store.save(collection, &access_codes())?,
            Collection::Comments => store.save(collection, &Vec::<Comment>::new())?,
        }
        info!("Seeded {}", collection);
        created.push(collection);
    }

    Ok(created)
}

pub fn friends() -> Vec<Friend> {
    (1..=FRIEND_COUNT).map(friend).collect()
}

fn friend(i: i64) -> Friend {
    let photo = |n: u32| MediaItem::image(format!("https://picsum.photos/seed/student{i}-{n}/800/1200"));

    let mut media = vec![photo(1), photo(2)];
    if i % 3 == 0 {
        let idx = ((i / 3 - 1) as usize) % VIDEO_URLS.len();
        media.push(MediaItem::video(VIDEO_URLS[idx]));
    } else {
        media.push(photo(3));
    }
    if i % 5 == 0 {
        media.push(photo(4));
    }

    Friend {
        id: i,
        name: if i == 1 { "Alex Johnson".to_string() } else { format!("Student {i}") },
        quote: QUOTES[(i - 1) as usize].to_string(),
        media,
    }
}

pub fn access_codes() -> AccessCodes {
    (1..=FRIEND_COUNT)
        .map(|i| (format!("CODE{i:03}"), format!("Student {i}")))
        .collect()
}
