use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisError};
use serde::{Serialize, de::DeserializeOwned};

/// JSON 값을 저장하는 Redis 클라이언트
///
/// `ConnectionManager`가 끊긴 연결을 자동으로 다시 맺으므로, 핸들을 복제해
/// 여러 요청에서 동시에 사용할 수 있습니다.
#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
}

impl RedisClient {
    /// 연결 관리자를 만들고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let mut conn = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut conn).await?;
        log::info!("✅ Redis 연결 성공");

        Ok(Self { conn })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(|e| codec_error("역직렬화 실패", e)))
            .transpose()
    }

    /// 값을 JSON으로 직렬화해 TTL과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), RedisError> {
        let json = serde_json::to_string(value).map_err(|e| codec_error("직렬화 실패", e))?;

        let mut conn = self.conn.clone();
        conn.set_ex(key, json, seconds).await
    }

    /// 키가 없을 때만 TTL과 함께 저장합니다 (`SET NX EX`). 저장했으면 `true`.
    pub async fn set_nx_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<bool, RedisError> {
        let json = serde_json::to_string(value).map_err(|e| codec_error("직렬화 실패", e))?;

        let mut conn = self.conn.clone();
        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("NX")
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.conn.clone();
        conn.del(key).await
    }
}

fn codec_error(context: &'static str, error: serde_json::Error) -> RedisError {
    RedisError::from((redis::ErrorKind::TypeError, context, error.to_string()))
}
