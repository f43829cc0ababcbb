//! The catalog shipped with the binary.
//!
//! Eight Bollywood and eight Hollywood films with an educational angle.
//! Hollywood entries carry a short note on what the film teaches.

use crate::types::{Catalog, Film};

impl Catalog {
    /// The built-in demo catalog, in display order
    pub fn builtin() -> Self {
        Catalog::new(vec![
            // Bollywood
            Film::new("Hichki", "A teacher with Tourette syndrome turns her weakness into strength", "bollywood", ""),
            Film::new("Nil Battey Sannata", "A mother joins school to inspire her daughter’s education", "bollywood", ""),
            Film::new("Dangal", "A father trains his daughters to become world-class wrestlers", "bollywood", ""),
            Film::new("Gunjan Saxena: The Kargil Girl", "India's first female combat pilot", "bollywood", ""),
            Film::new("Chhapaak", "The real-life story of acid attack survivor Laxmi Agarwal", "bollywood", ""),
            Film::new("English Vinglish", "A homemaker regains confidence by learning English", "bollywood", ""),
            Film::new("Secret Superstar", "A young girl fights for her dream to become a singer", "bollywood", ""),
            Film::new("I Am Kalam", "A poor boy dreams of becoming like Dr. A.P.J. Abdul Kalam", "bollywood", ""),
            // Hollywood
            Film::new(
                "Hidden Figures",
                "African-American women mathematicians at NASA",
                "hollywood",
                "Shows how math and perseverance helped send astronauts into orbit.",
            ),
            Film::new(
                "The Pursuit of Happyness",
                "Perseverance and self-belief in financial struggle",
                "hollywood",
                "Teaches resilience and hard work.",
            ),
            Film::new(
                "Mona Lisa Smile",
                "An art history professor inspires her female students",
                "hollywood",
                "Challenges gender roles and promotes intellectual freedom.",
            ),
            Film::new(
                "Akeelah and the Bee",
                "A girl from South LA competes in the National Spelling Bee",
                "hollywood",
                "Highlights education, confidence, and community support.",
            ),
            Film::new(
                "The Theory of Everything",
                "The life of Stephen Hawking",
                "hollywood",
                "Depicts scientific pursuit despite disability.",
            ),
            Film::new(
                "Legally Blonde",
                "A fashionista proves she can succeed at Harvard Law",
                "hollywood",
                "Promotes self-worth and breaking stereotypes.",
            ),
            Film::new(
                "Queen of Katwe",
                "A Ugandan girl becomes a chess champion",
                "hollywood",
                "Inspires through poverty, talent, and determination.",
            ),
            Film::new(
                "Freedom Writers",
                "A teacher inspires at-risk students with writing",
                "hollywood",
                "Demonstrates the power of storytelling and education.",
            ),
        ])
    }
}
