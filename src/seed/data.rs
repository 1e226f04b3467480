//! Built-in portfolio content. Ids are minted each time a set is built.

use crate::models::{Certificate, Project, Talk};

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: new_id(),
            title: "AI-Powered Content Generator".to_string(),
            description: "A sophisticated content generation tool using GPT models to create engaging blog posts, social media content, and marketing copy with customizable tones and styles.".to_string(),
            tech_stack: strings(&["Python", "OpenAI GPT", "Streamlit", "MongoDB", "Docker"]),
            image_url: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&h=400&fit=crop".to_string(),
            github_url: Some("https://github.com/vidyabaviskar/ai-content-generator".to_string()),
            demo_url: Some("https://ai-content-gen-demo.streamlit.app".to_string()),
            category: "Natural Language Processing".to_string(),
            featured: true,
        },
        Project {
            id: new_id(),
            title: "Smart Chatbot for E-commerce".to_string(),
            description: "An intelligent customer service chatbot that handles product inquiries, order tracking, and provides personalized recommendations using machine learning.".to_string(),
            tech_stack: strings(&["Python", "Rasa", "TensorFlow", "Flask", "Redis"]),
            image_url: "https://images.unsplash.com/photo-1531746790731-6c087fecd65a?w=600&h=400&fit=crop".to_string(),
            github_url: Some("https://github.com/vidyabaviskar/ecommerce-chatbot".to_string()),
            demo_url: None,
            category: "Conversational AI".to_string(),
            featured: true,
        },
        Project {
            id: new_id(),
            title: "Computer Vision Art Generator".to_string(),
            description: "A creative AI application that transforms regular photos into artistic masterpieces using style transfer and generative adversarial networks.".to_string(),
            tech_stack: strings(&["Python", "PyTorch", "OpenCV", "Gradio", "AWS"]),
            image_url: "https://images.unsplash.com/photo-1547036967-23d11aacaee0?w=600&h=400&fit=crop".to_string(),
            github_url: Some("https://github.com/vidyabaviskar/ai-art-generator".to_string()),
            demo_url: Some("https://huggingface.co/spaces/vidya/art-generator".to_string()),
            category: "Computer Vision".to_string(),
            featured: false,
        },
        Project {
            id: new_id(),
            title: "Predictive Analytics Dashboard".to_string(),
            description: "A comprehensive business intelligence dashboard that uses machine learning to predict sales trends, customer behavior, and market opportunities.".to_string(),
            tech_stack: strings(&["Python", "Scikit-learn", "Plotly", "FastAPI", "PostgreSQL"]),
            image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop".to_string(),
            github_url: Some("https://github.com/vidyabaviskar/predictive-dashboard".to_string()),
            demo_url: None,
            category: "Machine Learning".to_string(),
            featured: false,
        },
    ]
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: new_id(),
            title: "Google AI Platform Professional Certificate".to_string(),
            issuer: "Google Cloud".to_string(),
            date: "2024".to_string(),
            image_url: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=400&h=300&fit=crop".to_string(),
            credential_url: Some("https://google.com/certificates/ai-platform".to_string()),
        },
        Certificate {
            id: new_id(),
            title: "AWS Machine Learning Specialty".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "2024".to_string(),
            image_url: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=400&h=300&fit=crop".to_string(),
            credential_url: Some("https://aws.amazon.com/certification/certified-machine-learning-specialty/".to_string()),
        },
        Certificate {
            id: new_id(),
            title: "Deep Learning Specialization".to_string(),
            issuer: "DeepLearning.AI (Coursera)".to_string(),
            date: "2023".to_string(),
            image_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop".to_string(),
            credential_url: Some("https://coursera.org/verify/specialization/deep-learning".to_string()),
        },
        Certificate {
            id: new_id(),
            title: "Generative AI for Everyone".to_string(),
            issuer: "DeepLearning.AI".to_string(),
            date: "2024".to_string(),
            image_url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=400&h=300&fit=crop".to_string(),
            credential_url: Some("https://coursera.org/verify/generative-ai".to_string()),
        },
    ]
}

pub fn talks() -> Vec<Talk> {
    vec![
        Talk {
            id: new_id(),
            title: "The Future of Generative AI in Business".to_string(),
            event_name: "TechTalk Mumbai 2024".to_string(),
            date: "March 2024".to_string(),
            description: "Discussed the transformative potential of generative AI in various business sectors, covering practical applications and implementation strategies.".to_string(),
            image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=600&h=400&fit=crop".to_string(),
            video_url: Some("https://youtube.com/watch?v=example1".to_string()),
        },
        Talk {
            id: new_id(),
            title: "Women in AI: Breaking Barriers".to_string(),
            event_name: "WomenTech Global Conference".to_string(),
            date: "January 2024".to_string(),
            description: "Empowering session about women's role in shaping the future of artificial intelligence and encouraging more diversity in tech.".to_string(),
            image_url: "https://images.unsplash.com/photo-1573164713714-d95e436ab8d6?w=600&h=400&fit=crop".to_string(),
            video_url: Some("https://youtube.com/watch?v=example2".to_string()),
        },
        Talk {
            id: new_id(),
            title: "Building Ethical AI Systems".to_string(),
            event_name: "AI Ethics Summit 2024".to_string(),
            date: "February 2024".to_string(),
            description: "Deep dive into the importance of ethical considerations in AI development and deployment, with practical frameworks for responsible AI.".to_string(),
            image_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=600&h=400&fit=crop".to_string(),
            video_url: None,
        },
    ]
}
