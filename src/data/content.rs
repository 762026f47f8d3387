// data/content.rs - Navigation, hero copy and company details
//
// Editorial content that is not part of the catalog tables.

use crate::web_app::catalog::category_href;
use crate::web_app::model::{
    CallToAction, FooterGroup, HeroAlignment, HeroBackground, HeroConfig, HeroPage,
    NavigationItem, ProductCategory,
};

/// Company contact details shown in the footer and on the contact page
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub founded: &'static str,
    pub business_hours: &'static [&'static str],
    pub social: &'static [(&'static str, &'static str)],
}

pub const COMPANY: CompanyInfo = CompanyInfo {
    name: "Aclon Sports",
    tagline: "Empowering athletes worldwide with premium sportswear that delivers exceptional performance, comfort, and style.",
    address: "123 Sports Avenue, Athletic District, NY 10001",
    phone: "+1 (555) 123-4567",
    founded: "2020",
    business_hours: &[
        "Monday - Friday: 9:00 AM - 6:00 PM",
        "Saturday: 10:00 AM - 4:00 PM",
        "Sunday: Closed",
    ],
    social: &[
        ("Facebook", "https://facebook.com/aclonsports"),
        ("Twitter", "https://twitter.com/aclonsports"),
        ("Instagram", "https://instagram.com/aclonsports"),
        ("LinkedIn", "https://linkedin.com/company/aclonsports"),
    ],
};

/// Selling points on the about section: (icon, title, description)
pub const ABOUT_FEATURES: &[(&str, &str, &str)] = &[
    ("🏃‍♂️", "Performance Driven", "Engineered for athletes who push their limits every day"),
    ("🌱", "Sustainable Materials", "Eco-friendly fabrics that don't compromise on quality"),
    ("🎯", "Precision Fit", "Tailored designs that move with your body naturally"),
    ("⚡", "Innovation First", "Cutting-edge technology for superior comfort and style"),
];

/// Long-form copy for the subcategory cards
const SUBCATEGORY_BLURBS: &[(&str, &str)] = &[
    ("Yoga Leggings", "High-waisted leggings with four-way stretch for ultimate comfort during yoga practice."),
    ("Sports Bras", "High-impact support bras designed for active women during intense workouts."),
    ("Running Shorts", "Lightweight shorts with built-in liners for comfortable and unrestricted running."),
    ("Compression Tops", "High-performance compression tops for enhanced muscle support and recovery."),
    ("Training Jackets", "Versatile jackets with water-resistant finish for outdoor training sessions."),
    ("Basketball Jerseys", "Professional basketball jerseys with mesh construction for optimal performance."),
    ("Soccer Kits", "Complete soccer kits including jersey, shorts, and socks with team customization."),
    ("American Football Uniforms", "Professional football uniforms with reinforced stitching for durability."),
    ("Baseball Jerseys", "Authentic baseball jerseys with button-up design and team customization."),
    ("Volleyball Uniforms", "Lightweight volleyball uniforms designed for quick movements and comfort."),
    ("Stringer Tank Tops", "Classic stringer tank tops for maximum freedom of movement during workouts."),
    ("Sweatpants", "Premium sweatpants with elastic waistbands for ultimate comfort."),
    ("Hoodies", "Performance hoodies with fleece lining for pre and post-workout comfort."),
    ("Gym Shorts", "Comfortable gym shorts with built-in liners for unrestricted movement."),
    ("Performance T-Shirts", "High-performance t-shirts with moisture-wicking technology for intense workouts."),
];

pub fn subcategory_blurb(name: &str) -> Option<&'static str> {
    SUBCATEGORY_BLURBS
        .iter()
        .find(|(sub, _)| sub.eq_ignore_ascii_case(name))
        .map(|(_, blurb)| *blurb)
}

/// Heading and intro for a category landing page
pub fn category_heading(category: ProductCategory) -> (&'static str, &'static str) {
    match category {
        ProductCategory::Activewear => (
            "Activewear Collection",
            "High-performance activewear for running, training, and sports activities. Designed for athletes who demand excellence.",
        ),
        ProductCategory::SportsUniforms => (
            "Sports Uniforms",
            "Professional team uniforms for basketball, soccer, baseball, and volleyball. Customizable for your team needs.",
        ),
        ProductCategory::GymWear => (
            "Gym Wear Collection",
            "Comfortable gym wear for workouts and training sessions. Premium quality for your fitness journey.",
        ),
    }
}

fn link(name: &str, href: &str) -> NavigationItem {
    NavigationItem {
        name: name.to_string(),
        href: href.to_string(),
        description: None,
        children: Vec::new(),
    }
}

fn page(name: &str, href: &str, description: &str) -> NavigationItem {
    NavigationItem {
        description: Some(description.to_string()),
        ..link(name, href)
    }
}

/// Header navigation; the products entry lists one child per category
pub fn navigation() -> Vec<NavigationItem> {
    let category_links = ProductCategory::ALL
        .into_iter()
        .map(|category| link(category.name(), &category_href(category)))
        .collect();

    vec![
        page("Home", "/", "Welcome to Aclon Sports"),
        page("About", "/about", "Learn about our journey and mission"),
        NavigationItem {
            children: category_links,
            ..page("Products", "/products", "Browse our premium sportswear collection")
        },
        page(
            "Manufacturing",
            "/manufacturing",
            "Discover our manufacturing process and quality standards",
        ),
        page("Contact", "/contact", "Get in touch with our team"),
        page("Quote", "/quote", "Request a custom quote for your needs"),
    ]
}

pub fn footer_groups() -> Vec<FooterGroup> {
    let group = |title: &str, links: &[(&str, &str)]| FooterGroup {
        title: title.to_string(),
        links: links.iter().map(|(name, href)| link(name, href)).collect(),
    };

    vec![
        group(
            "Company",
            &[("About Us", "/about"), ("Manufacturing", "/manufacturing"), ("Contact", "/contact")],
        ),
        group(
            "Products",
            &[
                ("Activewear", "/products/activewear"),
                ("Sports Uniforms", "/products/sports-uniforms"),
                ("Gym Wear", "/products/gym-wear"),
                ("Custom Orders", "/quote"),
            ],
        ),
        group(
            "Support",
            &[("Contact Us", "/contact"), ("Request Quote", "/quote")],
        ),
    ]
}

fn cta(text: &str, href: &str) -> CallToAction {
    CallToAction {
        text: text.to_string(),
        href: href.to_string(),
    }
}

fn background(src: &str, alt: &str) -> Option<HeroBackground> {
    Some(HeroBackground {
        src: src.to_string(),
        alt: alt.to_string(),
    })
}

pub fn hero(page: HeroPage) -> HeroConfig {
    match page {
        HeroPage::Home => HeroConfig {
            headline: "Redefining Performance Wear".to_string(),
            subheadline: "Premium Activewear, Gym Wear & Sports Uniforms built for athletes who demand excellence. Experience unmatched comfort, style, and performance.".to_string(),
            primary_cta: cta("Explore Collection", "#products"),
            secondary_cta: Some(cta("Get Quote", "/quote")),
            background: background("/images/hero-bg.jpg", "Athlete in premium sportswear"),
            alignment: HeroAlignment::Center,
        },
        HeroPage::Products => HeroConfig {
            headline: "Premium Sportswear Collection".to_string(),
            subheadline: "Discover our range of high-performance activewear, sports uniforms, and gym wear designed for serious athletes.".to_string(),
            primary_cta: cta("Shop Now", "#products"),
            secondary_cta: Some(cta("Get a Quote", "/quote")),
            background: background("/images/products-hero.jpg", "Premium sportswear collection"),
            alignment: HeroAlignment::Center,
        },
        HeroPage::Manufacturing => HeroConfig {
            headline: "Crafted with Precision".to_string(),
            subheadline: "Discover our state-of-the-art manufacturing process and quality standards that set us apart in the industry.".to_string(),
            primary_cta: cta("Learn More", "#manufacturing"),
            secondary_cta: Some(cta("Contact Us", "/contact")),
            background: background("/images/manufacturing-hero.jpg", "Manufacturing facility"),
            alignment: HeroAlignment::Left,
        },
        HeroPage::Contact => HeroConfig {
            headline: "Get in Touch".to_string(),
            subheadline: "Ready to elevate your sportswear game? We're here to help you find the perfect solution for your needs.".to_string(),
            primary_cta: cta("Send Message", "#contact-form"),
            secondary_cta: Some(cta("Call Us", "tel:+15551234567")),
            background: background("/images/contact-hero.jpg", "Customer service team"),
            alignment: HeroAlignment::Center,
        },
        HeroPage::About => HeroConfig {
            headline: "Our Story".to_string(),
            subheadline: "From humble beginnings to industry leaders, learn about our journey and the passion that drives us to create exceptional sportswear.".to_string(),
            primary_cta: cta("Read More", "#story"),
            secondary_cta: None,
            background: background("/images/about-hero.jpg", "Team working on sportswear"),
            alignment: HeroAlignment::Center,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_products_children() {
        let nav = navigation();
        let products = nav.iter().find(|item| item.name == "Products").unwrap();
        let hrefs: Vec<&str> = products.children.iter().map(|c| c.href.as_str()).collect();
        assert_eq!(
            hrefs,
            ["/products/activewear", "/products/sports-uniforms", "/products/gym-wear"]
        );
    }

    #[test]
    fn test_every_page_has_navigation_entry() {
        let hrefs: Vec<String> = navigation().into_iter().map(|item| item.href).collect();
        for path in ["/", "/about", "/products", "/manufacturing", "/contact", "/quote"] {
            assert!(hrefs.iter().any(|h| h == path), "missing {path}");
        }
    }

    #[test]
    fn test_every_subcategory_has_blurb() {
        for (_, subs) in crate::data::tables::products::SUBCATEGORIES {
            for sub in subs.iter() {
                assert!(subcategory_blurb(sub).is_some(), "{sub}");
            }
        }
    }

    #[test]
    fn test_about_hero_has_no_secondary_cta() {
        assert!(hero(HeroPage::About).secondary_cta.is_none());
        assert_eq!(hero(HeroPage::Manufacturing).alignment, HeroAlignment::Left);
    }
}
