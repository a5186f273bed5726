//! Fixed sample articles served when no stored row qualifies.

use chrono::{Duration, Utc};

use crate::articles::dtos::ArticleView;

struct Sample {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    source: &'static str,
}

const WORLD: [Sample; 5] = [
    Sample {
        title: "Global Economic Summit Concludes with New Trade Agreement",
        description: "World leaders gathered for a three-day economic summit, resulting in a comprehensive trade agreement aimed at boosting international commerce. The agreement focuses on renewable energy partnerships and technology innovation hubs across participating nations.",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=400&h=200&fit=crop",
        source: "Global News Network",
    },
    Sample {
        title: "Breakthrough in Climate Change Research",
        description: "Scientists announce a major breakthrough in carbon capture technology that could significantly reduce atmospheric carbon dioxide levels. The new method is 40% more efficient than previous solutions and could be implemented globally within 5 years.",
        image: "https://images.unsplash.com/photo-1569163139394-de4798aa62b3?w=400&h=200&fit=crop",
        source: "Science Today",
    },
    Sample {
        title: "Major Sporting Event Draws Record Viewership",
        description: "International sporting event achieves record-breaking viewership numbers, with over 3 billion viewers tuning in across multiple platforms. The event showcased outstanding athletic performances and broke several world records.",
        image: "https://images.unsplash.com/photo-1552672260-eb7149bda42d?w=400&h=200&fit=crop",
        source: "Sports International",
    },
    Sample {
        title: "Tech Giants Announce Joint Sustainability Initiative",
        description: "Leading technology companies have partnered to launch a comprehensive sustainability initiative focused on reducing electronic waste and promoting recycling. The five-year plan aims to process 500 million tons of electronic waste responsibly.",
        image: "https://images.unsplash.com/photo-1531482615713-2afd69097998?w=400&h=200&fit=crop",
        source: "Tech News Daily",
    },
    Sample {
        title: "Healthcare Innovation Extends Life Expectancy",
        description: "New healthcare protocols and medical technologies are credited with increasing global life expectancy. The innovation includes AI-assisted diagnostics and personalized medicine approaches that improve treatment outcomes.",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=400&h=200&fit=crop",
        source: "Health & Science",
    },
];

const FOOTBALL: [Sample; 5] = [
    Sample {
        title: "Manchester City Extends Lead After Dominant Win",
        description: "Manchester City secured a commanding 3-0 victory over their rivals, extending their lead at the top of the Premier League. The team's attacking performance was exceptional, with multiple goals from different players showing their depth.",
        image: "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=400&h=200&fit=crop",
        source: "Sports Central",
    },
    Sample {
        title: "Transfer Window: Major Signings Announced",
        description: "Several top European clubs have announced major transfer signings ahead of the new season. The moves include high-profile international players and promising young talents from various leagues.",
        image: "https://images.unsplash.com/photo-1522869635100-ce697e9058b3?w=400&h=200&fit=crop",
        source: "Football Transfer News",
    },
    Sample {
        title: "Young Talent Breaks League Scoring Record",
        description: "A rising star player has broken the league's single-season scoring record, showcasing exceptional form and clinical finishing. The achievement comes at the midway point of the season, promising another successful chapter.",
        image: "https://images.unsplash.com/photo-1552315154-5a3a9e4f5e63?w=400&h=200&fit=crop",
        source: "Elite Football",
    },
    Sample {
        title: "Champions League Quarterfinals Draw Set",
        description: "The Champions League quarterfinal draw has set up exciting matchups between Europe's elite teams. The fixtures promise thrilling football with several David vs Goliath scenarios.",
        image: "https://images.unsplash.com/photo-1543699330-ab127b08ba38?w=400&h=200&fit=crop",
        source: "European Football",
    },
    Sample {
        title: "National Team Advances to Tournament Finals",
        description: "The national football team has qualified for the tournament finals after an impressive playoff performance. The team will face tough opposition but believes they can compete for the title.",
        image: "https://images.unsplash.com/photo-1566418699018-b5f0e2e9f6e4?w=400&h=200&fit=crop",
        source: "Sports News Daily",
    },
];

/// Samples are dated one day apart, newest first.
fn render(samples: &[Sample]) -> Vec<ArticleView> {
    let now = Utc::now();
    samples
        .iter()
        .zip(0..)
        .map(|(sample, days_ago)| ArticleView {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            url_to_image: Some(sample.image.to_string()),
            published_at: now - Duration::days(days_ago),
            source: sample.source.to_string(),
        })
        .collect()
}

pub fn world_articles() -> Vec<ArticleView> {
    render(&WORLD)
}

pub fn football_articles() -> Vec<ArticleView> {
    render(&FOOTBALL)
}
