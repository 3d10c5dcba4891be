// tests/support/builders.rs
//! Seed data shared by the integration tests: three topics (`paper` has no
//! articles), four users (`lurker` has written nothing), twelve articles
//! (eleven under `mitch`, one under `cats`) and eighteen comments.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use news_aggregator::domain::{
    article::{Article, ArticleBody, ArticleId, ArticleTitle},
    comment::{Comment, CommentBody, CommentId},
    topic::{Topic, TopicDescription, TopicSlug},
    user::{User, Username},
};

use super::mocks::InMemoryStore;

fn at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("fixture timestamp")
        .with_timezone(&Utc)
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: "Test Article".into(),
            topic: "mitch".into(),
            author: "butter_bridge".into(),
            body: "Test body".into(),
            created_at: at("2020-01-01T00:00:00Z"),
            votes: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn created_at(mut self, raw: &str) -> Self {
        self.created_at = at(raw);
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            topic: TopicSlug::new(self.topic).unwrap(),
            author: Username::new(self.author).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            created_at: self.created_at,
            votes: self.votes,
        }
    }
}

pub fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: TopicSlug::new(slug).unwrap(),
        description: TopicDescription::new(description).unwrap(),
    }
}

pub fn user(username: &str, name: &str) -> User {
    User {
        username: Username::new(username).unwrap(),
        name: name.into(),
        avatar_url: format!("https://avatars.example.com/{username}.png"),
    }
}

pub fn comment(id: i64, article_id: i64, author: &str, votes: i32, created_at: &str) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        author: Username::new(author).unwrap(),
        body: CommentBody::new(format!("comment {id} on article {article_id}")).unwrap(),
        votes,
        created_at: at(created_at),
    }
}

/// (id, title, topic, author, created_at, votes)
const ARTICLES: [(i64, &str, &str, &str, &str, i32); 12] = [
    (1, "Living in the shadow of a great man", "mitch", "butter_bridge", "2020-07-09T20:11:00Z", 100),
    (2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars", "2020-10-16T05:03:00Z", 0),
    (3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", "2020-11-03T09:12:00Z", 0),
    (4, "Student SUES Mitch!", "mitch", "rogersop", "2020-05-06T01:14:00Z", 0),
    (5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", "2020-08-03T13:14:00Z", 0),
    (6, "A", "mitch", "icellusedkars", "2020-10-18T01:00:00Z", 0),
    (7, "Z", "mitch", "icellusedkars", "2020-01-07T14:08:00Z", 0),
    (8, "Does Mitch predate civilisation?", "mitch", "icellusedkars", "2020-04-17T01:08:00Z", 0),
    (9, "They're not exactly dogs, are they?", "mitch", "butter_bridge", "2020-06-06T09:10:00Z", 0),
    (10, "Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", "2020-05-14T04:15:00Z", 0),
    (11, "Am I a cat?", "mitch", "icellusedkars", "2020-01-15T22:21:00Z", 0),
    (12, "Moustache", "mitch", "butter_bridge", "2020-10-11T11:24:00Z", 0),
];

/// (comment_id, article_id, author, votes)
const COMMENTS: [(i64, i64, &str, i32); 18] = [
    (1, 9, "butter_bridge", 16),
    (2, 1, "butter_bridge", 14),
    (3, 1, "icellusedkars", 100),
    (4, 1, "icellusedkars", 0),
    (5, 1, "icellusedkars", 0),
    (6, 1, "icellusedkars", 0),
    (7, 1, "icellusedkars", 0),
    (8, 1, "icellusedkars", 0),
    (9, 1, "icellusedkars", 0),
    (10, 3, "icellusedkars", 0),
    (11, 3, "icellusedkars", 0),
    (12, 1, "icellusedkars", 0),
    (13, 1, "icellusedkars", 0),
    (14, 5, "icellusedkars", 16),
    (15, 5, "butter_bridge", 1),
    (16, 6, "butter_bridge", 1),
    (17, 9, "icellusedkars", 20),
    (18, 1, "butter_bridge", 16),
];

pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = InMemoryStore::new();

    store.add_topic(topic("mitch", "The man, the Mitch, the legend"));
    store.add_topic(topic("cats", "Not dogs"));
    store.add_topic(topic("paper", "what books are made of"));

    store.add_user(user("butter_bridge", "jonny"));
    store.add_user(user("icellusedkars", "sam"));
    store.add_user(user("rogersop", "paul"));
    store.add_user(user("lurker", "do_nothing"));

    for (id, title, topic, author, created_at, votes) in ARTICLES {
        store.add_article(
            ArticleBuilder::new(id)
                .title(title)
                .topic(topic)
                .author(author)
                .created_at(created_at)
                .votes(votes)
                .build(),
        );
    }

    for (id, article_id, author, votes) in COMMENTS {
        let created_at = format!("2020-{:02}-01T12:00:00Z", (id % 12) + 1);
        store.add_comment(comment(id, article_id, author, votes, &created_at));
    }

    Arc::new(store)
}
