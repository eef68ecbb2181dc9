use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    ),
    tag = "Health"
)]
pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

const LANDING_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Bank Sampah Bersih</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background: #f5f5f5; }
        .container { max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 0 20px rgba(0,0,0,0.1); }
        h1 { color: #27ae60; text-align: center; }
        .features { display: grid; grid-template-columns: repeat(2, 1fr); gap: 15px; margin-top: 30px; }
        .feature { background: #e8f5e9; padding: 15px; border-radius: 8px; border-left: 4px solid #27ae60; }
        .feature h3 { margin-top: 0; color: #2e7d32; }
        .login-box { background: #e3f2fd; padding: 20px; border-radius: 8px; margin-top: 30px; }
        .btn { display: inline-block; padding: 10px 20px; background: #27ae60; color: white; text-decoration: none; border-radius: 5px; margin: 5px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🚀 Bank Sampah Bersih - Sistem Lengkap</h1>
        <p><strong>Status:</strong> ✅ Backend berjalan dengan sukses!</p>

        <div class="login-box">
            <h3>🔑 Login Demo:</h3>
            <p><strong>Admin:</strong> admin@banksampah.com / admin123</p>
            <p><strong>User:</strong> budi@example.com / user123</p>
            <a href="/api/test" class="btn">Test API</a>
            <a href="/api/waste-types" class="btn">Lihat Jenis Sampah</a>
        </div>

        <h2>📋 Fitur Tersedia:</h2>
        <div class="features">
            <div class="feature">
                <h3>1. Informasi Jenis Sampah</h3>
                <p>9 kategori lengkap dengan harga</p>
            </div>
            <div class="feature">
                <h3>2. Edukasi &amp; Tips</h3>
                <p>Artikel dan tips pengelolaan sampah</p>
            </div>
            <div class="feature">
                <h3>3. Jadwal Pengangkutan</h3>
                <p>Jadwal pickup sampah</p>
            </div>
            <div class="feature">
                <h3>4. Peta Lokasi</h3>
                <p>TPS &amp; bank sampah terdekat</p>
            </div>
            <div class="feature">
                <h3>5. Permintaan Penjemputan</h3>
                <p>Request pickup sampah</p>
            </div>
            <div class="feature">
                <h3>6. Registrasi &amp; Login</h3>
                <p>Sistem user management</p>
            </div>
            <div class="feature">
                <h3>7. Tabungan Bank Sampah</h3>
                <p>Saldo dan riwayat transaksi</p>
            </div>
            <div class="feature">
                <h3>8. Daftar Harga</h3>
                <p>Harga sampah real-time</p>
            </div>
            <div class="feature">
                <h3>9. Berita &amp; Pengumuman</h3>
                <p>Informasi terkini</p>
            </div>
        </div>

        <h3>🔧 API Endpoints:</h3>
        <ul>
            <li><code>GET /api/waste-types</code> - Daftar jenis sampah</li>
            <li><code>GET /api/collection-points</code> - Lokasi TPS/bank sampah</li>
            <li><code>GET /api/news</code> - Berita &amp; pengumuman</li>
            <li><code>GET /api/education</code> - Materi edukasi</li>
            <li><code>GET /api/tips</code> - Tips pengelolaan sampah</li>
            <li><code>POST /api/login</code> - Login user</li>
            <li><code>POST /api/register</code> - Registrasi user</li>
        </ul>
    </div>
</body>
</html>
"##;
