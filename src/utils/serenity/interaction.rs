use poise::serenity_prelude::{
    self as serenity, CacheHttp, CreateInteractionResponse, CreateInteractionResponseMessage,
};

/// Responses shared by button clicks and modal submissions.
pub trait InteractionExt {
    async fn create(
        &self,
        cache_http: impl CacheHttp,
        builder: CreateInteractionResponse,
    ) -> serenity::Result<()>;

    fn custom_id(&self) -> &str;

    /// Tells the platform the interaction was handled, without a message.
    async fn acknowledge(&self, cache_http: impl CacheHttp) -> serenity::Result<()> {
        self.create(cache_http, CreateInteractionResponse::Acknowledge)
            .await
    }

    async fn respond(
        &self,
        cache_http: impl CacheHttp,
        message: CreateInteractionResponseMessage,
    ) -> serenity::Result<()> {
        self.create(cache_http, CreateInteractionResponse::Message(message))
            .await
    }

    async fn reply_ephemeral(
        &self,
        cache_http: impl CacheHttp,
        content: impl Into<String>,
    ) -> serenity::Result<()> {
        self.respond(
            cache_http,
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        )
        .await
    }
}

impl InteractionExt for serenity::ComponentInteraction {
    async fn create(
        &self,
        cache_http: impl CacheHttp,
        builder: CreateInteractionResponse,
    ) -> serenity::Result<()> {
        self.create_response(cache_http, builder).await
    }

    fn custom_id(&self) -> &str {
        &self.data.custom_id
    }
}

impl InteractionExt for serenity::ModalInteraction {
    async fn create(
        &self,
        cache_http: impl CacheHttp,
        builder: CreateInteractionResponse,
    ) -> serenity::Result<()> {
        self.create_response(cache_http, builder).await
    }

    fn custom_id(&self) -> &str {
        &self.data.custom_id
    }
}
