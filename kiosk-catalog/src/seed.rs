//! The statically defined production content. In a real deployment this
//! data would come from a CMS; the query contract in [`crate::catalog`]
//! does not depend on where the collection originates.

use kiosk_common::model::{post::{Author, Post}, tag::TagFilter};

const AVATAR: &str = "/images/img_picture_placeholder_32x32.png";

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    description: &str,
    author: &str,
    date: &str,
    tags: &[&str],
    image: &str,
    featured: bool,
) -> Post {
    Post {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        author: Author {
            name: author.to_owned(),
            avatar: AVATAR.to_owned(),
        },
        date: date.to_owned(),
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
        image: image.to_owned(),
        featured,
    }
}

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "Understanding GST Compliance: A Complete Guide for Businesses",
            "Learn the essential aspects of GST compliance and how to streamline your \
             business processes for better efficiency and accuracy.",
            "Suvit Team",
            "2024-01-15",
            &["GST", "Compliance", "Business"],
            "/images/img_image.png",
            true,
        ),
        post(
            "2",
            "Automating Invoice Processing: Best Practices for 2024",
            "Discover the latest trends in invoice automation and how AI-powered solutions \
             can revolutionize your accounting workflow.",
            "Priya Sharma",
            "2024-01-10",
            &["Automation", "Invoicing", "AI"],
            "/images/img_image_2.png",
            false,
        ),
        post(
            "3",
            "Expense Tracking Made Simple: Tools and Techniques",
            "Explore modern expense tracking solutions that help businesses maintain better \
             financial control and transparency.",
            "Rahul Kumar",
            "2024-01-08",
            &["Expense Tracking", "Finance", "Tools"],
            "/images/img_image_placeholder.png",
            false,
        ),
        post(
            "4",
            "Digital Transformation in Accounting: What CAs Need to Know",
            "Stay ahead of the curve with insights into digital transformation trends \
             affecting the accounting profession.",
            "Dr. Meera Patel",
            "2024-01-05",
            &["Digital Transformation", "CA", "Technology"],
            "/images/img_image.png",
            false,
        ),
        post(
            "5",
            "Cloud-Based Accounting Solutions: Benefits and Implementation",
            "Learn about the advantages of cloud-based accounting and how to successfully \
             implement these solutions in your practice.",
            "Suvit Team",
            "2024-01-03",
            &["Cloud", "Accounting", "Implementation"],
            "/images/img_image_2.png",
            false,
        ),
        post(
            "6",
            "Tax Planning Strategies for Small Businesses",
            "Discover effective tax planning strategies that can help small businesses \
             optimize their tax liabilities and improve cash flow.",
            "Amit Singh",
            "2024-01-01",
            &["Tax Planning", "Small Business", "Strategy"],
            "/images/img_image_placeholder.png",
            false,
        ),
        post(
            "7",
            "8 Top Open-Source LLMs for 2024 and Their Uses",
            "Join us for a full day of events sharing best practices from industry leaders \
             and technology experts.",
            "Rohit Kadam",
            "2024-01-15",
            &["AI", "Technology", "LLM"],
            "/images/img_image.png",
            false,
        ),
        post(
            "8",
            "Digital Transformation in Accounting Practices",
            "Explore how digital transformation is reshaping the accounting industry and \
             what it means for your practice.",
            "Priya Sharma",
            "2024-01-12",
            &["Digital Transformation", "Technology", "Innovation"],
            "/images/img_image_2.png",
            false,
        ),
        post(
            "9",
            "Automated Compliance Reporting: A Complete Guide",
            "Learn how to implement automated compliance reporting systems to streamline \
             your regulatory requirements.",
            "Rajesh Kumar",
            "2024-01-10",
            &["Compliance", "Automation", "Reporting"],
            "/images/img_image_placeholder.png",
            false,
        ),
        post(
            "10",
            "Financial Planning Strategies for Small Businesses",
            "Essential financial planning strategies that can help small businesses grow \
             and succeed in competitive markets.",
            "Neha Sharma",
            "2024-01-08",
            &["Financial Planning", "Small Business", "Strategy"],
            "/images/img_image_placeholder.png",
            false,
        ),
        post(
            "11",
            "Digital Banking Solutions for Modern Businesses",
            "Explore the latest digital banking solutions and how they can streamline your \
             business financial operations.",
            "Vikram Singh",
            "2024-01-06",
            &["Digital Banking", "Technology", "Finance"],
            "/images/img_image_placeholder.png",
            false,
        ),
        post(
            "12",
            "Tax Optimization Techniques for Entrepreneurs",
            "Advanced tax optimization techniques that entrepreneurs can use to maximize \
             their business efficiency.",
            "Anjali Patel",
            "2024-01-04",
            &["Tax Optimization", "Entrepreneurs", "Strategy"],
            "/images/img_image_placeholder.png",
            false,
        ),
    ]
}

#[must_use]
pub fn tag_filters() -> Vec<TagFilter> {
    vec![
        TagFilter::new("all", "All"),
        TagFilter::new("gst", "GST"),
        TagFilter::new("automation", "Automation"),
        TagFilter::new("compliance", "Compliance"),
        TagFilter::new("technology", "Technology"),
    ]
}

#[cfg(test)]
mod tests {
    use crate::seed::{posts, tag_filters};
    use std::collections::HashSet;

    #[test]
    fn post_ids_are_unique() {
        let posts = posts();
        let ids: HashSet<&str> = posts.iter().map(|post| post.id.as_str()).collect();

        assert_eq!(ids.len(), posts.len());
    }

    #[test]
    fn exactly_one_seeded_post_is_featured() {
        let featured: Vec<_> = posts().into_iter().filter(|post| post.featured).collect();

        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "1");
    }

    #[test]
    fn filter_catalog_is_independent_of_post_tags() {
        let filters = tag_filters();
        let posts = posts();

        // "All" is a sentinel and never appears as a post tag; some post
        // tags (e.g. "Finance") have no filter entry. Neither direction of
        // referential integrity is expected.
        assert!(filters.iter().any(|filter| filter.label == "All"));
        assert!(
            posts
                .iter()
                .flat_map(|post| &post.tags)
                .any(|tag| tag == "Finance")
        );
        assert!(filters.iter().all(|filter| filter.label != "Finance"));
    }
}
