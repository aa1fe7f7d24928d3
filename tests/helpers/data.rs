//! Fake data generators for test records

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use HubDesk::models::{AdminLevel, CarouselImage, Stock, TestimonialMessage, User};

/// A user with generated name/email and a fixed id
pub fn fake_user(id: &str, admin: AdminLevel) -> User {
    User {
        id: id.to_string(),
        name: Name().fake(),
        email: SafeEmail().fake(),
        organization: Some(CompanyName().fake()),
        designation: None,
        phone: None,
        admin,
        created_at: None,
        updated_at: None,
    }
}

/// A user with a chosen name, for suggestion assertions
pub fn named_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@center.org", name.to_lowercase()),
        organization: None,
        designation: None,
        phone: None,
        admin: AdminLevel::Member,
        created_at: None,
        updated_at: None,
    }
}

/// A carousel of `n` images in server order
pub fn fake_carousel(n: usize) -> Vec<CarouselImage> {
    (0..n)
        .map(|i| CarouselImage {
            id: format!("img-{}", i),
            image_url: format!("https://cdn.center.org/carousel/{}.jpg", i),
            caption: None,
            order: i as u32,
        })
        .collect()
}

/// `n` testimonials in server order
pub fn fake_testimonials(n: usize) -> Vec<TestimonialMessage> {
    (0..n)
        .map(|i| TestimonialMessage {
            id: format!("msg-{}", i),
            author: Name().fake(),
            organization: Some(CompanyName().fake()),
            body: format!("Testimonial body {}", i),
            order: i as u32,
        })
        .collect()
}

/// A small stock inventory
pub fn fake_stock() -> Vec<Stock> {
    vec![
        Stock {
            id: "st-1".to_string(),
            name: "HDMI cable".to_string(),
            kind: "electronics".to_string(),
            count: 12,
        },
        Stock {
            id: "st-2".to_string(),
            name: "Whiteboard marker".to_string(),
            kind: "stationery".to_string(),
            count: 40,
        },
    ]
}
