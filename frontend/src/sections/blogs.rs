use yew::prelude::*;

struct BlogPost {
    title: &'static str,
    published: &'static str,
    excerpt: &'static str,
    image: &'static str,
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Why a 60/40 portfolio still makes sense",
        published: "March 2024",
        excerpt: "Bonds had a rough couple of years. Here is why we still hold them, and when we don't.",
        image: "/assets/blog-sixty-forty.webp",
    },
    BlogPost {
        title: "Rebalancing bands explained",
        published: "February 2024",
        excerpt: "Calendar or threshold? How we decide when to trade, with the numbers behind it.",
        image: "/assets/blog-rebalancing.webp",
    },
    BlogPost {
        title: "Cash is a position too",
        published: "January 2024",
        excerpt: "How much to keep on the sidelines, and where to keep it while it waits.",
        image: "/assets/blog-cash.webp",
    },
];

#[function_component(Blogs)]
pub fn blogs() -> Html {
    html! {
        <section class="blogs-section">
            <style>{BLOGS_CSS}</style>
            <h2>{"From the blog"}</h2>
            <div class="blogs-grid">
                { for POSTS.iter().map(|post| html! {
                    <article class="blog-card">
                        <img src={post.image} alt={post.title} loading="lazy" />
                        <div class="blog-card-body">
                            <span class="blog-date">{post.published}</span>
                            <h3>{post.title}</h3>
                            <p>{post.excerpt}</p>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}

const BLOGS_CSS: &str = r#"
    .blogs-section {
        padding: 5rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .blogs-section h2 {
        font-size: 2.25rem;
        text-align: center;
        margin-bottom: 3rem;
        color: #1f2937;
    }
    .blogs-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .blog-card {
        border-radius: 12px;
        overflow: hidden;
        background: #fff;
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
    }
    .blog-card img {
        width: 100%;
        height: 11rem;
        object-fit: cover;
        background: #e5e7eb;
    }
    .blog-card-body {
        padding: 1.5rem;
    }
    .blog-date {
        color: #6b7280;
        font-size: 0.85rem;
    }
    .blog-card h3 {
        margin: 0.5rem 0;
        color: #111827;
    }
    .blog-card p {
        color: #4b5563;
        line-height: 1.6;
    }
    @media (max-width: 900px) {
        .blogs-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
