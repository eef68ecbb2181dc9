use chrono::{Months, Utc};
use sqlx::{Sqlite, Transaction};

use crate::{db::DbPool, password};

/// Populate reference data on first boot: 9 waste types, 4 collection points,
/// 3 news items, 2 education articles, 6 tips, and the two demo accounts.
///
/// The emptiness check and every insert run inside one transaction, so two
/// racing first boots cannot both seed: the loser's check sees the winner's
/// committed rows (or its commit fails) and the run becomes a no-op.
pub async fn run(pool: &DbPool) -> anyhow::Result<()> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waste_types")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        tracing::debug!("seed data already present, skipping");
        return Ok(());
    }

    insert_waste_types(&mut tx).await?;
    insert_collection_points(&mut tx).await?;
    insert_news(&mut tx).await?;
    insert_education_materials(&mut tx).await?;
    insert_tips(&mut tx).await?;
    insert_demo_accounts(&mut tx).await?;

    tx.commit().await?;
    tracing::info!("seed data inserted");
    Ok(())
}

async fn insert_waste_types(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    let waste_types: &[(&str, &str, &str, f64, &str, &str, &str)] = &[
        (
            "Botol Plastik PET",
            "Plastik",
            "Botol minuman plastik transparan",
            3500.0,
            "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=400",
            "Dicuci → Dihancurkan → Dilelehkan → Dijadikan biji plastik → Produk baru",
            "Mengurangi sampah, hemat energi 80%, kurangi polusi",
        ),
        (
            "Plastik PP/PE",
            "Plastik",
            "Plastik kemasan makanan, tutup botol",
            2500.0,
            "https://images.unsplash.com/photo-1586500036706-41963cdf7c80?w=400",
            "Dipilah → Dicuci → Dicacah → Dijual ke pabrik daur ulang",
            "Mencegah pencemaran tanah, bisa didaur ulang 2-3x",
        ),
        (
            "Kardus/Karton",
            "Kertas",
            "Kardus kemasan, karton tebal",
            2000.0,
            "https://images.unsplash.com/photo-1600585154340-043788447d1d?w=400",
            "Dibersihkan → Direndam → Dihancurkan → Dibentuk pulp → Kertas baru",
            "Selamatkan pohon, hemat air 50%, kurangi emisi CO2",
        ),
        (
            "Koran/Majalah",
            "Kertas",
            "Kertas koran, majalah bekas",
            1500.0,
            "https://images.unsplash.com/photo-1588681664899-f142ff2dc9b1?w=400",
            "Dipilah → Dihancurkan → Diputihkan → Dibuat kertas daur ulang",
            "1 ton kertas daur ulang = selamatkan 17 pohon",
        ),
        (
            "Kaleng Aluminium",
            "Logam",
            "Kaleng minuman, kemasan aluminium",
            7000.0,
            "https://images.unsplash.com/photo-1621451537084-482c73073a0f?w=400",
            "Dihancurkan → Dilebur → Dibentuk ingot → Dijadikan produk baru",
            "Hemat energi 95%, bisa didaur ulang tanpa batas",
        ),
        (
            "Besi Tua",
            "Logam",
            "Besi bekas, rangka bangunan",
            3000.0,
            "https://images.unsplash.com/photo-1612810806563-4cb8265db55f?w=400",
            "Dipilah → Dipotong → Dilebur → Dicetak → Produk baru",
            "Hemat bahan baku, kurangi pertambangan",
        ),
        (
            "Botol Kaca",
            "Kaca",
            "Botol minuman kaca",
            1000.0,
            "https://images.unsplash.com/photo-1511895426328-dc8714191300?w=400",
            "Dipilah warna → Dihancurkan → Dilebur → Dibentuk botol baru",
            "Bisa didaur ulang 100%, tidak kehilangan kualitas",
        ),
        (
            "Elektronik",
            "E-Waste",
            "HP rusak, charger, kabel",
            5000.0,
            "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=400",
            "Dibongkar → Dipisahkan komponen → Logam didaur ulang → Plastik diolah",
            "Cegah pencemaran logam berat, ambil logam berharga",
        ),
        (
            "Sampah Organik",
            "Organik",
            "Sisa makanan, daun kering",
            500.0,
            "https://images.unsplash.com/photo-1540420773420-3366772f4999?w=400",
            "Dipilah → Dikompos → Pupuk organik → Untuk tanaman",
            "Jadikan pupuk, kurangi gas metana, suburkan tanah",
        ),
    ];

    for (name, category, description, price, image_url, process, benefits) in waste_types {
        sqlx::query(
            r#"
            INSERT INTO waste_types
                (name, category, description, price_per_kg, image_url, recycling_process, benefits)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(description)
        .bind(price)
        .bind(image_url)
        .bind(process)
        .bind(benefits)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

async fn insert_collection_points(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    let points: &[(&str, &str, &str, f64, f64, &str, &str, &str, &str, &str)] = &[
        (
            "Bank Sampah Bersih - Kantor Pusat",
            "BANK_SAMPAH",
            "Jl. Bratasena Raya No. 3, Tangerang Selatan",
            -6.3000,
            106.6833,
            "Senin-Sabtu: 08:00-17:00",
            "10 ton/hari",
            "Budi Santoso",
            "08123456789",
            "Timbangan digital, Gudang, Mesin pres",
        ),
        (
            "TPS 3R Pamulang",
            "TPS",
            "Jl. Pamulang Permai, Pamulang, Tangerang Selatan",
            -6.3426,
            106.7382,
            "Setiap Hari: 06:00-18:00",
            "5 ton/hari",
            "Siti Rahayu",
            "08198765432",
            "Tempat sampah terpisah, Mesin kompos",
        ),
        (
            "Bank Sampah Hijau Lestari",
            "BANK_SAMPAH",
            "Jl. BSD Green Office Park, BSD City",
            -6.3026,
            106.6524,
            "Senin-Jumat: 09:00-16:00",
            "8 ton/hari",
            "Ahmad Fauzi",
            "082112345678",
            "Drop box 24 jam, Aplikasi mobile",
        ),
        (
            "TPS Pondok Cabe",
            "TPS",
            "Jl. Raya Pondok Cabe, Pamulang",
            -6.3389,
            106.7642,
            "Setiap Hari: 05:00-20:00",
            "15 ton/hari",
            "Rudi Hartono",
            "08133445566",
            "Armada angkut, Tempat pembuangan akhir",
        ),
    ];

    for (name, kind, address, lat, lon, hours, capacity, person, phone, facilities) in points {
        sqlx::query(
            r#"
            INSERT INTO collection_points
                (name, type, address, latitude, longitude, operating_hours,
                 capacity, contact_person, contact_phone, facilities)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(name)
        .bind(kind)
        .bind(address)
        .bind(lat)
        .bind(lon)
        .bind(hours)
        .bind(capacity)
        .bind(person)
        .bind(phone)
        .bind(facilities)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

async fn insert_news(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();
    // Seeded announcements stay visible for a year instead of carrying a
    // hard-coded expiry that lapses while the row is still current.
    let expiry = today
        .checked_add_months(Months::new(12))
        .ok_or_else(|| anyhow::anyhow!("news expiry date out of range"))?;

    let news_items: &[(&str, &str, &str, &str, &str)] = &[
        (
            "Harga Sampah Plastik Naik 15%",
            r#"<h3>Kabar Gembira untuk Nasabah!</h3>
<p>Harga sampah plastik mengalami kenaikan sebesar 15%. Kenaikan ini disebabkan
oleh meningkatnya permintaan bahan baku daur ulang dari industri manufaktur.</p>
<h4>Detail Kenaikan Harga:</h4>
<ul>
    <li>Botol Plastik PET: Rp 3.000 → Rp 3.500/kg</li>
    <li>Plastik PP/PE: Rp 2.200 → Rp 2.500/kg</li>
    <li>Plastik Lembaran: Rp 1.800 → Rp 2.000/kg</li>
</ul>
<p>Manfaatkan kesempatan ini untuk meningkatkan tabungan Anda dengan menyetor
sampah plastik lebih banyak!</p>"#,
            "HARGA",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800",
            "Admin Bank Sampah",
        ),
        (
            "Program \"Sampah untuk Pendidikan\"",
            r#"<h3>Berbagi Kebaikan Melalui Sampah</h3>
<p>Bank Sampah Bersih meluncurkan program baru "Sampah untuk Pendidikan" dimana
10% dari keuntungan penjualan sampah akan didonasikan untuk pembelian buku
pelajaran bagi anak-anak kurang mampu.</p>
<h4>Cara Berpartisipasi:</h4>
<ol>
    <li>Daftar di program melalui dashboard</li>
    <li>Setor sampah seperti biasa</li>
    <li>Otomatis 10% akan dialokasikan untuk donasi</li>
    <li>Dapatkan sertifikat donasi</li>
</ol>
<p>Mari bersama-sama berbuat baik!</p>"#,
            "PROGRAM",
            "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800",
            "Tim CSR",
        ),
        (
            "Jadwal Libur Nasional",
            r#"<h3>Perubahan Jam Operasional</h3>
<p>Berikut jadwal libur nasional yang mempengaruhi jam operasional
Bank Sampah Bersih:</p>
<table border="1" style="border-collapse: collapse; width: 100%;">
    <tr><th>Tanggal</th><th>Hari</th><th>Keterangan</th><th>Status</th></tr>
    <tr><td>1 Januari</td><td>Rabu</td><td>Tahun Baru</td><td>TUTUP</td></tr>
    <tr><td>29 Maret</td><td>Sabtu</td><td>Hari Raya Nyepi</td><td>TUTUP</td></tr>
    <tr><td>10 April</td><td>Kamis</td><td>Isra Miraj</td><td>BUKA 08:00-12:00</td></tr>
    <tr><td>1 Mei</td><td>Kamis</td><td>Hari Buruh</td><td>TUTUP</td></tr>
    <tr><td>29 Mei</td><td>Kamis</td><td>Hari Raya Waisak</td><td>BUKA 08:00-12:00</td></tr>
</table>
<p>Mohon perhatikan perubahan jam operasional di atas.</p>"#,
            "PENGUMUMAN",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800",
            "Manajemen",
        ),
    ];

    for (title, content, category, image_url, author) in news_items {
        sqlx::query(
            r#"
            INSERT INTO news (title, content, category, image_url, author, publish_date, expiry_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(category)
        .bind(image_url)
        .bind(author)
        .bind(today)
        .bind(expiry)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

async fn insert_education_materials(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    let materials: &[(&str, &str, &str, &str, &str)] = &[
        (
            "Cara Memilah Sampah dengan Benar",
            r#"<h3>Panduan Lengkap Memilah Sampah</h3>
<p>Memilah sampah adalah langkah pertama dan terpenting dalam pengelolaan
sampah yang baik.</p>"#,
            "ARTICLE",
            "BASIC",
            "https://images.unsplash.com/photo-1578558288137-7207cb8c0e85?w=800",
        ),
        (
            "Proses Daur Ulang Plastik",
            r#"<h3>Dari Sampah Menjadi Barang Berguna</h3>
<p>Plastik yang Anda setor akan melalui proses panjang sebelum menjadi produk
baru.</p>"#,
            "ARTICLE",
            "ADVANCED",
            "https://images.unsplash.com/photo-1586500036706-41963cdf7c80?w=800",
        ),
    ];

    for (title, content, kind, category, image_url) in materials {
        sqlx::query(
            r#"
            INSERT INTO education_materials (title, content, type, category, image_url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(kind)
        .bind(category)
        .bind(image_url)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

async fn insert_tips(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    let tips: &[(&str, &str, &str, &str, &str)] = &[
        (
            "Gunakan Tas Belanja Sendiri",
            "Selalu bawa tas belanja kain saat berbelanja untuk menghindari kantong plastik sekali pakai.",
            "🛍️",
            "Reduce",
            "Easy",
        ),
        (
            "Kurangi Kemasan Plastik",
            "Pilih produk dengan kemasan minimal atau bawa wadah sendiri saat belanja.",
            "🚫",
            "Reduce",
            "Easy",
        ),
        (
            "Kompos Sampah Organik",
            "Jadikan sisa makanan dan daun kering menjadi kompos untuk tanaman di rumah.",
            "🌱",
            "Recycle",
            "Medium",
        ),
        (
            "Repair, Don't Replace",
            "Perbaiki barang rusak sebelum membeli yang baru. Lebih hemat dan ramah lingkungan.",
            "🔧",
            "Reuse",
            "Medium",
        ),
        (
            "Donasi Barang Layak Pakai",
            "Barang yang masih bagus bisa didonasikan ke yang membutuhkan daripada dibuang.",
            "❤️",
            "Reuse",
            "Easy",
        ),
        (
            "Pisahkan Sampah dari Awal",
            "Siapkan tempat sampah terpisah di rumah untuk memudahkan pemilahan.",
            "🗑️",
            "Basic",
            "Easy",
        ),
    ];

    for (title, content, icon, category, difficulty) in tips {
        sqlx::query(
            r#"
            INSERT INTO tips (title, content, icon, category, difficulty)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(icon)
        .bind(category)
        .bind(difficulty)
        .execute(&mut **tx)
        .await?;
    }

    Ok(())
}

async fn insert_demo_accounts(tx: &mut Transaction<'_, Sqlite>) -> anyhow::Result<()> {
    let today = Utc::now().date_naive();

    let admin_hash = password::hash_password("admin123")?;
    sqlx::query(
        r#"
        INSERT INTO users
            (user_id, name, email, phone, password_hash, address,
             balance, points, join_date, is_admin)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind("ADMIN001")
    .bind("Administrator")
    .bind("admin@banksampah.com")
    .bind("081234567890")
    .bind(&admin_hash)
    .bind("Jl. Kantor Pusat")
    .bind(1_000_000.0)
    .bind(10_000_i64)
    .bind(today)
    .bind(true)
    .execute(&mut **tx)
    .await?;

    let user_hash = password::hash_password("user123")?;
    sqlx::query(
        r#"
        INSERT INTO users
            (user_id, name, email, phone, password_hash, address,
             balance, points, join_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind("BSB100001")
    .bind("Budi Santoso")
    .bind("budi@example.com")
    .bind("081298765432")
    .bind(&user_hash)
    .bind("Jl. Melati No. 123")
    .bind(50_000.0)
    .bind(50_i64)
    .bind(today)
    .execute(&mut **tx)
    .await?;

    Ok(())
}
