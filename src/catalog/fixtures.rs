//! Brochure content
//!
//! Every array keeps ids unique and in ascending order.

use super::model::{
    City, ContactInfo, FooterContent, GalleryItem, RecentPost, ServiceArea, ServiceGroup,
    ServiceListing, Testimonial, VideoEvent,
};

const PLACEHOLDER: &str = "/api/placeholder/400/300";
const AVATAR_PLACEHOLDER: &str = "/api/placeholder/150/150";

pub const HERO_TITLE: &str = "Premium Services For You";
pub const HERO_TAGLINE: &str = "Experience the best-in-class service with our dedicated team of professionals. We deliver excellence in every project.";
pub const HERO_CTA: &str = "Get Started";

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        image: "https://images.unsplash.com/photo-1746648177616-eed4cc1a1213?q=80&w=1376&auto=format&fit=crop",
        title: "Abstract Sculpture Study",
        artist: "Elena Moraitis",
        date: "2023",
        category: "Contemporary",
    },
    GalleryItem {
        id: 2,
        image: "https://images.unsplash.com/photo-1746796624796-7f0fd61570a1?q=80&w=1527&auto=format&fit=crop",
        title: "Winter Retreat",
        artist: "A. John Valore",
        date: "1963",
        category: "Landscape",
    },
    GalleryItem {
        id: 3,
        image: "https://plus.unsplash.com/premium_photo-1723777236925-a07c8cee66dd?q=80&w=1374&auto=format&fit=crop",
        title: "The Night Watch (Detail)",
        artist: "Dutch Masters Collection",
        date: "1642",
        category: "Classical",
    },
    GalleryItem {
        id: 4,
        image: "https://images.unsplash.com/photo-1746793329190-e2c6bea16388?q=80&w=1528&auto=format&fit=crop",
        title: "Color Field Study #27",
        artist: "Marcus Rothwell",
        date: "1971",
        category: "Modern",
    },
    GalleryItem {
        id: 5,
        image: "https://cdn.pixabay.com/photo/2025/05/02/15/58/flower-girl-9574211_1280.jpg",
        title: "Portrait in Black & White",
        artist: "Sarah Chen",
        date: "2019",
        category: "Photography",
    },
    GalleryItem {
        id: 6,
        image: "https://cdn.pixabay.com/photo/2020/09/27/03/38/woman-5605529_640.jpg",
        title: "Geometric Tensions",
        artist: "Paul Westheim",
        date: "1988",
        category: "Abstract",
    },
];

pub const LISTINGS: &[ServiceListing] = &[
    ServiceListing {
        id: 1,
        name: "Urban Expert Service",
        rating: 3.7,
        review_count: 50,
        address: "New Link Road Borivali West, Mumbai",
        services: &["AC Repair & Services", "Refrigerator Repair & Services"],
        phone: "09845458106",
        images: &[PLACEHOLDER, PLACEHOLDER, PLACEHOLDER],
        trusted: false,
        verified: false,
        top_search: false,
    },
    ServiceListing {
        id: 2,
        name: "Parmar Airtronics",
        rating: 5.0,
        review_count: 1253,
        address: "Vidya Mandir Road Dahisar East, Mumbai",
        services: &["AC Dealers", "AC Repair & Services"],
        phone: "09845475198",
        images: &[PLACEHOLDER, PLACEHOLDER, PLACEHOLDER],
        trusted: true,
        verified: true,
        top_search: true,
    },
    ServiceListing {
        id: 3,
        name: "Cool Comfort Solutions",
        rating: 4.5,
        review_count: 832,
        address: "MG Road Kandivali West, Mumbai",
        services: &[
            "AC Installation",
            "AC Repair & Services",
            "Annual Maintenance",
        ],
        phone: "09876543210",
        images: &[PLACEHOLDER, PLACEHOLDER, PLACEHOLDER],
        trusted: true,
        verified: true,
        top_search: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        service: "AC Service",
        name: "Vijay Singh",
        date: "2025-05-02",
        rating: 5,
        image: AVATAR_PLACEHOLDER,
        content: "I visited Vivo Service Centre for a phone repair, and I was extremely satisfied with the great service. The staff were helpful and efficient, and my phone was fixed in no time!",
    },
    Testimonial {
        id: 2,
        service: "Refrigerator Repair",
        name: "Priya Patel",
        date: "2025-04-28",
        rating: 4,
        image: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg",
        content: "The technician arrived promptly and diagnosed the issue with my refrigerator quickly. Very professional service and reasonable pricing. Would recommend!",
    },
    Testimonial {
        id: 3,
        service: "Washing Machine Service",
        name: "Rahul Sharma",
        date: "2025-05-01",
        rating: 5,
        image: AVATAR_PLACEHOLDER,
        content: "Outstanding service! My washing machine was making strange noises, and the technician fixed it perfectly. The service was fast and the technician was very knowledgeable.",
    },
    Testimonial {
        id: 4,
        service: "Microwave Repair",
        name: "Ananya Gupta",
        date: "2025-04-25",
        rating: 5,
        image: AVATAR_PLACEHOLDER,
        content: "Excellent service! My microwave wasn't heating properly, and now it works like new. The technician was polite and explained the issue clearly.",
    },
    Testimonial {
        id: 5,
        service: "TV Installation",
        name: "Arjun Mehta",
        date: "2025-04-30",
        rating: 4,
        image: AVATAR_PLACEHOLDER,
        content: "Very professional TV installation service. The technician was careful with my new TV and took time to explain all the features. Great experience overall!",
    },
];

pub const CITIES: &[City] = &[
    City { id: 1, name: "Guwahati", image: PLACEHOLDER, is_new: false },
    City { id: 2, name: "BANGALORE", image: PLACEHOLDER, is_new: false },
    City { id: 3, name: "DELHI", image: PLACEHOLDER, is_new: true },
    City { id: 4, name: "KOLKATA", image: PLACEHOLDER, is_new: false },
    City { id: 5, name: "MUMBAI", image: PLACEHOLDER, is_new: true },
    City { id: 6, name: "CHENNAI", image: PLACEHOLDER, is_new: false },
    City { id: 7, name: "HYDERABAD", image: PLACEHOLDER, is_new: true },
    City { id: 8, name: "AHMEDABAD", image: PLACEHOLDER, is_new: false },
];

pub const EVENTS: &[VideoEvent] = &[
    VideoEvent {
        id: 1,
        title: "Badshah Performing in Celebrity Night at JIMS",
        date: "11 Feb, 2022",
        time: "11:00 AM - 12:00 PM",
        thumbnail: "/api/placeholder/800/500",
        video_url: Some("https://www.youtube.com/embed/u5iYRgAFwL8"),
        instructor: None,
        organizer: None,
        featured: true,
    },
    VideoEvent {
        id: 2,
        title: "Workshop on Digital Marketing",
        date: "15 Mar, 2022",
        time: "2:00 PM - 4:00 PM",
        thumbnail: PLACEHOLDER,
        video_url: None,
        instructor: Some("Dr. Roah Mathur and Mr. Amar Khan from JIMS"),
        organizer: None,
        featured: false,
    },
    VideoEvent {
        id: 3,
        title: "Vibrant Collage Making Competition",
        date: "20 Apr, 2022",
        time: "10:00 AM - 1:00 PM",
        thumbnail: PLACEHOLDER,
        video_url: None,
        instructor: None,
        organizer: Some("SYNERGY Club"),
        featured: false,
    },
    VideoEvent {
        id: 4,
        title: "Annual Tech Fest",
        date: "5 May, 2022",
        time: "9:00 AM - 6:00 PM",
        thumbnail: PLACEHOLDER,
        video_url: None,
        instructor: None,
        organizer: None,
        featured: false,
    },
    VideoEvent {
        id: 5,
        title: "Leadership Summit 2022",
        date: "12 Jun, 2022",
        time: "11:00 AM - 3:00 PM",
        thumbnail: PLACEHOLDER,
        video_url: None,
        instructor: None,
        organizer: None,
        featured: false,
    },
    VideoEvent {
        id: 6,
        title: "Career Counseling Session",
        date: "25 Jul, 2022",
        time: "3:00 PM - 5:00 PM",
        thumbnail: PLACEHOLDER,
        video_url: None,
        instructor: None,
        organizer: None,
        featured: false,
    },
];

pub const SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        key: "ac",
        title: "AC Services",
        tab_label: "AC",
        services: &[
            "Banquet Halls",
            "Bridal Requisite",
            "Caterers",
            "Home Service",
            "Office Service",
        ],
    },
    ServiceGroup {
        key: "washing",
        title: "Washing Machine Services",
        tab_label: "Washing",
        services: &[
            "Beauty Parlours",
            "Spa & Massages",
            "Salons",
            "Home Service",
            "Commercial",
        ],
    },
    ServiceGroup {
        key: "woven",
        title: "Woven Services",
        tab_label: "Woven",
        services: &[
            "AC Service",
            "Car Service",
            "Bike Service",
            "Home Service",
            "Commercial",
        ],
    },
    ServiceGroup {
        key: "refrigerator",
        title: "Refrigerator Services",
        tab_label: "Refrigerator",
        services: &[
            "Movies",
            "Grocery",
            "Electricians",
            "Home Service",
            "Commercial",
        ],
    },
];

pub const HEADER_CONTACT: ContactInfo = ContactInfo {
    phone: "+1 (555) 123-4567",
    whatsapp: "+1 (555) 987-6543",
    email: "contact@bestservices.com",
    address: "123 Service Ave, Business District",
    socials: &["Facebook", "Instagram", "Twitter", "LinkedIn"],
};

pub const FOOTER: FooterContent = FooterContent {
    brand: "Assimox",
    tagline: "APPLIANCES REPAIRS",
    address: "54B, Tailstoi Town 5238 MT, La city, IA 522364",
    email: "contact@assimox.com",
    phone: "+1800 456 7890",
    service_areas: &[
        ServiceArea { name: "Guwahati", highlighted: false },
        ServiceArea { name: "Malegaon", highlighted: false },
        ServiceArea { name: "Chandipur", highlighted: true },
        ServiceArea { name: "Dinhata", highlighted: true },
        ServiceArea { name: "Kolkata", highlighted: false },
    ],
    services: &[
        "Refrigerator",
        "Microwave",
        "Washing Machine",
        "Cookware Stove",
        "Juicer Mixer",
    ],
    recent_posts: &[
        RecentPost {
            title: "Common Refrigerator Problems & Solutions",
            date: "May 8, 2025",
        },
        RecentPost {
            title: "Extend the Life of Your Washing Machine",
            date: "May 5, 2025",
        },
        RecentPost {
            title: "Kitchen Appliance Maintenance Tips",
            date: "April 30, 2025",
        },
    ],
    copyright: "© Copyright Assimox 2024. All rights reserved.",
};
