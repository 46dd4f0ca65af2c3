//! Static content catalogs: the services we offer, past projects shown in
//! the gallery and client testimonials. All records are compile-time data;
//! nothing here is fetched or persisted.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub services: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub year: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Plumbing Services",
        icon: "🔧",
        description: "Professional plumbing solutions for homes and businesses with 24/7 emergency support.",
        services: &[
            "Pipe Installation & Repair",
            "Drain Cleaning",
            "Water Heater Services",
            "Emergency Repairs",
            "Bathroom Fitting",
        ],
        image: "/assets/service-plumbing.jpg",
    },
    Service {
        title: "Painting Services",
        icon: "🎨",
        description: "Transform your spaces with our expert interior and exterior painting services.",
        services: &[
            "Interior Painting",
            "Exterior Painting",
            "Texture Work",
            "Wall Preparation",
            "Color Consultation",
        ],
        image: "/assets/service-painting.webp",
    },
    Service {
        title: "Waterproofing",
        icon: "🛡️",
        description: "Protect your property from water damage with our advanced waterproofing solutions.",
        services: &[
            "Roof Waterproofing",
            "Bathroom Waterproofing",
            "Basement Sealing",
            "Terrace Treatment",
            "Wall Waterproofing",
        ],
        image: "/assets/service-waterproofing.jpg",
    },
    Service {
        title: "Carpentry Work",
        icon: "🪚",
        description: "Custom woodwork and furniture solutions crafted by skilled carpenters.",
        services: &[
            "Custom Furniture",
            "Kitchen Cabinets",
            "Wardrobe Design",
            "Door & Window Frames",
            "Interior Woodwork",
        ],
        image: "/assets/service-carpentry.webp",
    },
    Service {
        title: "Architectural Consultancy",
        icon: "📐",
        description: "Professional architectural design and consultation services for your dream projects.",
        services: &[
            "Design Planning",
            "3D Visualization",
            "Structural Consultation",
            "Project Management",
            "Interior Design",
        ],
        image: "/assets/service-architectural.jpg",
    },
];

/// Category filter options for the project gallery. The leading "All"
/// sentinel shows the whole catalog.
pub const CATEGORIES: &[&str] = &[
    "All",
    "Carpentry",
    "Waterproofing",
    "Painting",
    "Plumbing",
    "Architecture",
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Modern Kitchen Renovation",
        category: "Carpentry",
        image: "/assets/project-kitchen.jpg",
        description: "Complete kitchen makeover with custom cabinets and granite countertops",
        location: "Sector 17, Chandigarh",
        year: "2024",
    },
    Project {
        id: 2,
        title: "Bathroom Waterproofing",
        category: "Waterproofing",
        image: "/assets/project-waterproofing.jpg",
        description: "Professional waterproofing solution for master bathroom renovation",
        location: "Sector 35, Chandigarh",
        year: "2024",
    },
    Project {
        id: 3,
        title: "Office Interior Painting",
        category: "Painting",
        image: "/assets/project-painting.jpg",
        description: "Premium interior painting with texture work for corporate office",
        location: "IT Park, Mohali",
        year: "2023",
    },
    Project {
        id: 4,
        title: "Residential Plumbing",
        category: "Plumbing",
        image: "/assets/project-plumbing.jpg",
        description: "Complete plumbing installation for new residential construction",
        location: "Sector 22, Chandigarh",
        year: "2024",
    },
    Project {
        id: 5,
        title: "Custom Furniture Design",
        category: "Carpentry",
        image: "/assets/project-carpentry.jpg",
        description: "Bespoke wooden furniture and built-in storage solutions",
        location: "Panchkula",
        year: "2023",
    },
    Project {
        id: 6,
        title: "Architectural Planning",
        category: "Architecture",
        image: "/assets/project-architecture.jpg",
        description: "Complete architectural design and 3D visualization for villa project",
        location: "Zirakpur",
        year: "2024",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rajesh Kumar",
        location: "Sector 17, Chandigarh",
        rating: 5,
        comment: "Excellent plumbing work! They fixed our water heater issue quickly and professionally. Highly recommended for anyone in Chandigarh.",
    },
    Testimonial {
        name: "Priya Sharma",
        location: "Sector 35, Chandigarh",
        rating: 5,
        comment: "The painting team did an amazing job on our home interior. Very clean work and completed on time. Great value for money.",
    },
    Testimonial {
        name: "Amit Singh",
        location: "Mohali",
        rating: 5,
        comment: "Professional waterproofing service for our terrace. No more water leakage issues. The team was knowledgeable and efficient.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let mut seen = HashSet::new();
        for project in PROJECTS {
            assert!(seen.insert(project.id), "duplicate project id {}", project.id);
        }
    }

    #[test]
    fn project_categories_belong_to_the_fixed_set() {
        for project in PROJECTS {
            assert!(
                CATEGORIES.contains(&project.category),
                "unknown category {} on project {}",
                project.category,
                project.id
            );
        }
    }

    #[test]
    fn all_sentinel_is_first_and_never_a_project_category() {
        assert_eq!(CATEGORIES[0], "All");
        assert!(PROJECTS.iter().all(|p| p.category != "All"));
    }

    #[test]
    fn every_service_lists_sub_offerings() {
        for service in SERVICES {
            assert!(!service.services.is_empty(), "{} has no sub-offerings", service.title);
        }
    }
}
